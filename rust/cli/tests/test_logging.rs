use preflop_cli::logging::TestLogSubscriber;
use preflop_cli::run;
use preflop_engine::builder::seed_initial_nodes;
use preflop_engine::positions::TableFormat;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

#[test]
fn apply_emits_debug_event_with_fields() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("seed.json");
    preflop_cli::io_utils::write_scenario(&seed, &seed_initial_nodes(TableFormat::SixMax), true)
        .unwrap();
    let seed_s = seed.to_string_lossy().into_owned();

    let subscriber = TestLogSubscriber::new();
    let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());

    let code = tracing::subscriber::with_default(registry, || {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(
            [
                "preflop", "apply", "--input", &seed_s, "--node", "2", "--action", "open",
            ],
            &mut out,
            &mut err,
        )
    });
    assert_eq!(code, 0);

    let entries = subscriber.entries();
    let applied = entries
        .iter()
        .find(|e| e.message.contains("applied scenario action"))
        .expect("engine should log the applied action");
    assert_eq!(applied.level, Level::DEBUG);
    assert_eq!(applied.field("node"), Some("2"));
    assert_eq!(applied.field("position"), Some("CO"));
    assert_eq!(applied.field("action"), Some("open"));
    assert_eq!(applied.field("auto_folded"), Some("[NodeId(0), NodeId(1)]"));
}
