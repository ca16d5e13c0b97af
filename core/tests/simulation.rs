//! Scripted playback: ordering, cadence, and cancellation.

use course_core::command::UiCommand;
use course_core::engine::CourseEngine;
use course_core::event::CourseEvent;

fn engine() -> CourseEngine {
    CourseEngine::new("sim-test".into(), 42)
}

fn is_simulation_event(event: &CourseEvent) -> bool {
    matches!(
        event,
        CourseEvent::SimulationStarted { .. }
            | CourseEvent::AgentMoved { .. }
            | CourseEvent::SimulationPrompt { .. }
            | CourseEvent::SimulationResult { .. }
            | CourseEvent::SimulationLine { .. }
            | CourseEvent::SimulationCompleted { .. }
    )
}

#[test]
fn agent_walkthrough_plays_in_order() {
    let mut engine = engine();
    let events = engine.handle(UiCommand::RunAgentSimulation);
    assert!(matches!(
        &events[0],
        CourseEvent::SimulationStarted { banner, .. } if banner.contains("AI Agent Simulation")
    ));

    let mut transcript = engine.advance(20_000);
    transcript.retain(is_simulation_event);

    // Three (move, prompt, result) triplets, then the completion banner.
    assert_eq!(transcript.len(), 10);
    let targets = ["customer", "product", "inventory"];
    for (i, target) in targets.iter().enumerate() {
        assert!(matches!(
            &transcript[i * 3],
            CourseEvent::AgentMoved { target: t, .. } if t == target
        ));
        assert!(matches!(
            &transcript[i * 3 + 1],
            CourseEvent::SimulationPrompt { text, .. } if text.ends_with("...")
        ));
        assert!(matches!(
            &transcript[i * 3 + 2],
            CourseEvent::SimulationResult { text, .. } if text.starts_with("✓ ")
        ));
    }
    assert!(matches!(
        &transcript[9],
        CourseEvent::SimulationCompleted { text, .. } if text.contains("Simulation Complete!")
    ));
}

#[test]
fn agent_walkthrough_keeps_the_original_cadence() {
    let mut engine = engine();
    engine.handle(UiCommand::RunAgentSimulation);

    // Nothing between the banner and the first move at 1000 ms.
    assert!(engine.advance(999).iter().all(|e| !is_simulation_event(e)));
    let events = engine.advance(1);
    assert!(events
        .iter()
        .any(|e| matches!(e, CourseEvent::AgentMoved { target, .. } if target == "customer")));

    // Prompt 500 ms later, result a second after that.
    let events = engine.advance(500);
    assert!(events
        .iter()
        .any(|e| matches!(e, CourseEvent::SimulationPrompt { .. })));
    let events = engine.advance(1000);
    assert!(events
        .iter()
        .any(|e| matches!(e, CourseEvent::SimulationResult { .. })));
}

#[test]
fn module_switch_aborts_inflight_playback() {
    let mut engine = engine();
    engine.handle(UiCommand::Start);
    engine.handle(UiCommand::RunAgentSimulation);
    engine.advance(2000);

    // Moving on kills the queued steps; nothing stale ever surfaces.
    engine.handle(UiCommand::GoToModule {
        id: "commerce".into(),
    });
    let later = engine.advance(30_000);
    assert!(later.iter().all(|e| !is_simulation_event(e)));
}

#[test]
fn restart_aborts_inflight_playback() {
    let mut engine = engine();
    engine.handle(UiCommand::RunShoppingSimulation {
        scenario: "fashion".into(),
    });
    engine.advance(1000);
    engine.handle(UiCommand::Restart);

    let later = engine.advance(30_000);
    assert!(later.iter().all(|e| !is_simulation_event(e)));
}

#[test]
fn shopping_scenario_emits_numbered_lines_then_the_result() {
    let mut engine = engine();
    let events = engine.handle(UiCommand::RunShoppingSimulation {
        scenario: "electronics".into(),
    });
    assert!(matches!(
        &events[0],
        CourseEvent::SimulationStarted { banner, .. } if banner.contains("Shopping Agent")
    ));

    let mut transcript = engine.advance(10_000);
    transcript.retain(is_simulation_event);
    assert_eq!(transcript.len(), 8);

    for (i, event) in transcript[..7].iter().enumerate() {
        assert!(matches!(
            event,
            CourseEvent::SimulationLine { number, .. } if *number == i as u32 + 1
        ));
    }
    assert!(matches!(
        &transcript[7],
        CourseEvent::SimulationCompleted { text, .. } if text.contains("ASUS ROG Strix G15")
    ));
}

#[test]
fn unknown_shopping_scenario_is_a_no_op() {
    let mut engine = engine();
    let events = engine.handle(UiCommand::RunShoppingSimulation {
        scenario: "automobiles".into(),
    });
    assert!(events.is_empty());
    assert!(engine.advance(10_000).is_empty());
}

#[test]
fn environment_pokes_answer_immediately() {
    let mut engine = engine();
    let events = engine.handle(UiCommand::PokeEnvironment {
        element: "inventory".into(),
    });
    assert!(matches!(
        &events[0],
        CourseEvent::EnvironmentNote { text } if text.starts_with("Inventory status")
    ));

    let events = engine.handle(UiCommand::PokeEnvironment {
        element: "mystery".into(),
    });
    assert!(matches!(
        &events[0],
        CourseEvent::EnvironmentNote { text } if text == "Environment interaction detected."
    ));
}

#[test]
fn chat_reply_arrives_after_the_thinking_delay() {
    let mut engine = engine();
    let events = engine.handle(UiCommand::Chat {
        text: "best gaming laptop?".into(),
    });
    assert!(matches!(
        &events[0],
        CourseEvent::ChatMessage { author, text }
            if *author == course_core::chatbot::ChatAuthor::User && text == "best gaming laptop?"
    ));
    assert_eq!(events.len(), 1);

    assert!(engine.advance(999).is_empty());
    let events = engine.advance(1);
    assert!(matches!(
        &events[0],
        CourseEvent::ChatMessage { author, text }
            if *author == course_core::chatbot::ChatAuthor::Bot && text.contains("ASUS ROG")
    ));
}

#[test]
fn identical_seeds_replay_identical_event_streams() {
    let script = |engine: &mut CourseEngine| {
        let mut events = engine.handle(UiCommand::Start);
        events.extend(engine.handle(UiCommand::RunAgentSimulation));
        events.extend(engine.handle(UiCommand::Chat {
            text: "something unmatched".into(),
        }));
        events.extend(engine.handle(UiCommand::RunRecommendation {
            algorithm: "collaborative".into(),
            price_weight: 40,
            rating_weight: 30,
            similarity_weight: 30,
        }));
        events.extend(engine.advance(15_000));
        events
    };

    let a: Vec<String> = script(&mut CourseEngine::new("replay-a".into(), 1337))
        .iter()
        .map(|e| e.to_json().unwrap())
        .collect();
    let b: Vec<String> = script(&mut CourseEngine::new("replay-b".into(), 1337))
        .iter()
        .map(|e| e.to_json().unwrap())
        .collect();
    assert_eq!(a, b);
}
