use anyhow::Result;
use wifi_passcheck::domain::ports::Connector;
use wifi_passcheck::{Attempt, AttemptStatus, Candidates, Dispatcher, NmcliConnector};

fn attempt(password: &str) -> Attempt {
    Attempt {
        index: 7,
        ssid: "HomeNet".to_string(),
        password: password.to_string(),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_echo_receives_argv_verbatim() -> Result<()> {
    let connector = NmcliConnector::with_program("echo").ifname(Some("wlan0".to_string()));

    let outcome = connector.attempt(&attempt("pa ss'word")).await;

    assert_eq!(outcome.status, AttemptStatus::Accepted);
    assert_eq!(outcome.index, 7);
    assert_eq!(
        outcome.stdout.trim_end(),
        "dev wifi connect HomeNet password pa ss'word ifname wlan0"
    );
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn test_nonzero_exit_is_rejected() -> Result<()> {
    let connector = NmcliConnector::with_program("false");

    let outcome = connector.attempt(&attempt("hunter2")).await;

    assert_eq!(outcome.status, AttemptStatus::Rejected);
    assert_eq!(outcome.exit_code, Some(1));
    Ok(())
}

#[tokio::test]
async fn test_missing_program_fails_each_attempt_without_aborting() -> Result<()> {
    let connector = NmcliConnector::with_program("wifi-passcheck-no-such-program");
    let dispatcher = Dispatcher::new(connector, 2);
    let candidates = Candidates::from(vec![
        "one".to_string(),
        "two".to_string(),
        "three".to_string(),
    ]);

    let outcomes = dispatcher.run("HomeNet", &candidates).await;

    assert_eq!(outcomes.len(), 3);
    for outcome in &outcomes {
        match &outcome.status {
            AttemptStatus::SpawnFailed { message } => {
                assert!(message.contains("wifi-passcheck-no-such-program"));
            }
            other => panic!("expected SpawnFailed, got {:?}", other),
        }
        assert_eq!(outcome.exit_code, None);
    }
    Ok(())
}
