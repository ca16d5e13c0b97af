//! Navigation and lifecycle: module order, progress math, restart, and
//! keyboard shortcuts.

use course_core::clock::COURSE_DURATION_SECS;
use course_core::command::UiCommand;
use course_core::engine::CourseEngine;
use course_core::event::CourseEvent;
use course_core::module::{ModuleId, MODULE_ORDER};

fn engine() -> CourseEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    CourseEngine::new("nav-test".into(), 42)
}

#[test]
fn start_enters_fundamentals_and_runs_the_clock() {
    let mut engine = engine();
    let events = engine.handle(UiCommand::Start);

    assert!(matches!(events[0], CourseEvent::CourseStarted));
    assert!(matches!(
        events[1],
        CourseEvent::ModuleEntered {
            module: ModuleId::Fundamentals,
            ..
        }
    ));
    assert_eq!(engine.current_module(), Some(ModuleId::Fundamentals));
    assert!((engine.progress() - 1.0 / 6.0).abs() < 1e-12);

    // The countdown is live: one second later the timer has moved.
    let ticked = engine.advance(1000);
    assert!(ticked.iter().any(|e| matches!(
        e,
        CourseEvent::TimerUpdated { remaining, .. } if *remaining == COURSE_DURATION_SECS - 1
    )));
}

#[test]
fn start_is_a_no_op_once_underway() {
    let mut engine = engine();
    engine.handle(UiCommand::Start);
    let events = engine.handle(UiCommand::Start);
    assert!(events.is_empty());
}

#[test]
fn every_module_reports_progress_as_position_over_six() {
    let mut engine = engine();
    engine.handle(UiCommand::Start);

    for (index, module) in MODULE_ORDER.iter().enumerate() {
        let events = engine.handle(UiCommand::GoToModule {
            id: module.id().to_string(),
        });
        let expected = (index + 1) as f64 / 6.0;
        assert!((engine.progress() - expected).abs() < 1e-12);
        assert!(events.iter().any(|e| matches!(
            e,
            CourseEvent::ModuleEntered { progress, label, .. }
                if (*progress - expected).abs() < 1e-12
                    && *label == format!("Module {} of 6", index + 1)
        )));
    }
}

#[test]
fn unknown_module_ids_are_silently_ignored() {
    let mut engine = engine();
    engine.handle(UiCommand::Start);
    engine.handle(UiCommand::GoToModule {
        id: "payments".into(),
    });

    for bad in ["introduction", "Payments", "module-7", ""] {
        let events = engine.handle(UiCommand::GoToModule { id: bad.into() });
        assert!(events.is_empty(), "expected no-op for {bad:?}");
        assert_eq!(engine.current_module(), Some(ModuleId::Payments));
    }
}

#[test]
fn case_study_and_exercise_selection_track_any_id() {
    let mut engine = engine();
    engine.handle(UiCommand::Start);

    let events = engine.handle(UiCommand::ShowCaseStudy {
        id: "amazon".into(),
    });
    assert!(matches!(&events[0], CourseEvent::CaseStudySelected { id } if id == "amazon"));
    assert_eq!(engine.selected_case_study(), Some("amazon"));

    engine.handle(UiCommand::ShowExercise {
        id: "chatbot".into(),
    });
    assert_eq!(engine.selected_exercise(), Some("chatbot"));
}

#[test]
fn restart_resets_everything_and_is_idempotent() {
    let mut engine = engine();
    engine.handle(UiCommand::Start);
    engine.handle(UiCommand::GoToModule {
        id: "exercises".into(),
    });
    engine.handle(UiCommand::ShowCaseStudy {
        id: "stripe".into(),
    });
    engine.advance(90_000);

    for _ in 0..2 {
        let events = engine.handle(UiCommand::Restart);
        assert!(matches!(events[0], CourseEvent::CourseRestarted));
        assert!(matches!(
            &events[1],
            CourseEvent::TimerUpdated { remaining, display }
                if *remaining == COURSE_DURATION_SECS && display == "03:00:00"
        ));
        assert_eq!(engine.current_module(), None);
        assert_eq!(engine.progress(), 0.0);
        assert_eq!(engine.remaining(), COURSE_DURATION_SECS);
        assert_eq!(engine.selected_case_study(), None);
    }

    // The clock is stopped after a restart.
    let events = engine.advance(5000);
    assert!(!events
        .iter()
        .any(|e| matches!(e, CourseEvent::TimerUpdated { .. })));
}

#[test]
fn keyboard_shortcuts_map_digits_and_r() {
    assert_eq!(
        UiCommand::from_shortcut('1'),
        Some(UiCommand::GoToModule {
            id: "fundamentals".into()
        })
    );
    assert_eq!(
        UiCommand::from_shortcut('6'),
        Some(UiCommand::GoToModule {
            id: "future".into()
        })
    );
    assert_eq!(UiCommand::from_shortcut('r'), Some(UiCommand::Restart));
    assert_eq!(UiCommand::from_shortcut('R'), Some(UiCommand::Restart));
    assert_eq!(UiCommand::from_shortcut('7'), None);
    assert_eq!(UiCommand::from_shortcut('x'), None);
}

#[test]
fn module_entry_emits_chart_data_where_the_page_draws_one() {
    let mut engine = engine();
    engine.handle(UiCommand::Start);

    let events = engine.handle(UiCommand::GoToModule {
        id: "commerce".into(),
    });
    assert!(events
        .iter()
        .any(|e| matches!(e, CourseEvent::ChartReady { chart } if chart.id == "inventory")));

    let events = engine.handle(UiCommand::GoToModule {
        id: "future".into(),
    });
    assert!(events
        .iter()
        .any(|e| matches!(e, CourseEvent::ChartReady { chart } if chart.id == "impact")));

    let events = engine.handle(UiCommand::GoToModule {
        id: "payments".into(),
    });
    assert!(!events
        .iter()
        .any(|e| matches!(e, CourseEvent::ChartReady { .. })));
}
