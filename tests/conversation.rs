//! End-to-end conversation flows through the public API.

use medichat::{Engine, EngineConfig, Intent, PatientProfile, ResponseData, Session};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medichat=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

fn engine() -> Engine {
    Engine::with_builtin_knowledge(EngineConfig::for_tests())
}

#[test]
fn full_triage_conversation() {
    init_tracing();
    let engine = engine();
    let session = Session::new(&EngineConfig::for_tests(), 7);
    let profile = PatientProfile::new("Amina", 34, "Female");

    let welcome = engine.welcome_message(&profile, &session);
    assert!(welcome.contains("Amina"));

    // Greeting, then a symptom report, then a short follow-up that keeps
    // the symptom context, then gratitude, then goodbye.
    let hello = engine.process("hello doctor", &profile, &session);
    assert_eq!(hello.intent, Intent::Greeting);

    let report = engine.process("I have a runny nose and sneezing", &profile, &session);
    assert_eq!(report.intent, Intent::SymptomReport);
    let suggested = match &report.data {
        ResponseData::SymptomReport(data) => {
            assert_eq!(data.possible_conditions[0].name, "Common Cold");
            data.suggested_diagnosis.clone()
        }
        other => panic!("expected symptom report data, got {other:?}"),
    };
    assert_eq!(suggested.as_deref(), Some("Common Cold"));

    let follow_up = engine.process("it feels worse at night", &profile, &session);
    assert_eq!(follow_up.intent, Intent::SymptomReport);

    let thanks = engine.process("thank you so much", &profile, &session);
    assert_eq!(thanks.intent, Intent::Gratitude);
    assert!(thanks.message.contains("common cold"));

    let bye = engine.process("goodbye", &profile, &session);
    assert_eq!(bye.intent, Intent::Goodbye);

    assert_eq!(session.history_len(), 5);
}

#[test]
fn emergency_interrupts_any_conversation() {
    init_tracing();
    let engine = engine();
    let session = Session::new(&EngineConfig::for_tests(), 7);
    let profile = PatientProfile::new("Bo", 58, "Male");

    engine.process("I have a headache", &profile, &session);
    let reply = engine.process(
        "now there's chest pain and I can't breathe",
        &profile,
        &session,
    );
    assert_eq!(reply.intent, Intent::Emergency);
    assert!(reply.message.contains("911"));
    assert_eq!(session.cache_len(), 1, "only the headache reply was cached");
}

#[test]
fn payloads_serialize_for_transport() {
    init_tracing();
    let engine = engine();
    let session = Session::new(&EngineConfig::for_tests(), 3);
    let profile = PatientProfile::new("Amina", 34, "Female");

    let reply = engine.process("I have a fever and a cough", &profile, &session);
    let json = serde_json::to_string(&reply).unwrap();
    assert!(json.contains("\"intent\":\"symptom_report\""));
    assert!(json.contains("\"kind\":\"symptom_report\""));
}
