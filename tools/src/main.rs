//! course-runner: headless driver for the course engine.
//!
//! Usage:
//!   course-runner --seed 12345
//!   course-runner --seed 12345 --json
//!   course-runner --ipc-mode

use anyhow::Result;
use course_core::{
    command::UiCommand,
    engine::{CourseEngine, UiState},
    event::CourseEvent,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetState,
    Advance { ms: u64 },
    Command { command: UiCommand },
    Quit,
}

#[derive(serde::Serialize)]
struct IpcResponse {
    events: Vec<CourseEvent>,
    state: UiState,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let json = args.iter().any(|a| a == "--json");

    let session_id = format!("session-{}", uuid::Uuid::new_v4());
    let mut engine = CourseEngine::new(session_id.clone(), seed);

    if ipc_mode {
        return run_ipc_loop(&mut engine);
    }

    println!("AI Agent E-Commerce & Payment Systems — course-runner");
    println!("  session: {session_id}");
    println!("  seed:    {seed}");
    println!();

    run_walkthrough(&mut engine, json)?;
    print_summary(&engine);
    Ok(())
}

/// Drive a complete scripted session: start, visit every module, run all
/// three simulations and all three scoring demos, chat a little, finish
/// the course, and collect the certificate.
fn run_walkthrough(engine: &mut CourseEngine, json: bool) -> Result<()> {
    let step = |engine: &mut CourseEngine, commands: Vec<UiCommand>, settle_ms: u64| {
        let mut events = Vec::new();
        for command in commands {
            events.extend(engine.handle(command));
        }
        events.extend(engine.advance(settle_ms));
        events
    };

    let mut transcript = Vec::new();

    transcript.extend(step(engine, vec![UiCommand::Start], 3_000));
    transcript.extend(step(
        engine,
        vec![UiCommand::RunAgentSimulation],
        15_000,
    ));

    transcript.extend(step(
        engine,
        vec![UiCommand::GoToModule {
            id: "commerce".into(),
        }],
        2_000,
    ));
    transcript.extend(step(
        engine,
        vec![UiCommand::RunShoppingSimulation {
            scenario: "electronics".into(),
        }],
        10_000,
    ));

    transcript.extend(step(
        engine,
        vec![
            UiCommand::GoToModule {
                id: "payments".into(),
            },
            UiCommand::RunFraudDetection {
                amount_threshold: 500,
                velocity_sensitivity: 50,
                location_risk: 50,
                device_trust: 50,
            },
        ],
        6_000,
    ));

    transcript.extend(step(
        engine,
        vec![
            UiCommand::GoToModule {
                id: "case-studies".into(),
            },
            UiCommand::ShowCaseStudy {
                id: "amazon".into(),
            },
        ],
        1_000,
    ));

    transcript.extend(step(
        engine,
        vec![
            UiCommand::GoToModule {
                id: "exercises".into(),
            },
            UiCommand::RunRecommendation {
                algorithm: "collaborative".into(),
                price_weight: 40,
                rating_weight: 30,
                similarity_weight: 30,
            },
            UiCommand::RunPriceOptimization {
                demand_sensitivity: 50,
                competition_weight: 50,
                min_margin: 20,
            },
            UiCommand::ConfigureChat {
                store_type: "electronics".into(),
                personality: "friendly".into(),
            },
            UiCommand::Chat {
                text: "Which gaming laptop should I buy?".into(),
            },
        ],
        3_000,
    ));

    // Fast-forward the rest of the 3 hours, then collect the certificate.
    transcript.extend(engine.advance(3 * 60 * 60 * 1000));
    transcript.extend(step(
        engine,
        vec![UiCommand::RequestCertificate {
            completed_on: chrono::Local::now().date_naive(),
        }],
        0,
    ));

    for event in &transcript {
        if json {
            println!("{}", event.to_json()?);
        } else if let Some(line) = describe(event) {
            println!("{line}");
        }
    }
    Ok(())
}

fn run_ipc_loop(engine: &mut CourseEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut buffer = String::new();
    let mut handle = stdin.lock();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("invalid IPC request: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        let events = match request {
            IpcRequest::Quit => break,
            IpcRequest::GetState => Vec::new(),
            IpcRequest::Advance { ms } => engine.advance(ms),
            IpcRequest::Command { command } => engine.handle(command),
        };

        let response = IpcResponse {
            events,
            state: engine.state(),
        };
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }
    Ok(())
}

/// Human-readable transcript line for an event. Cosmetic choreography is
/// skipped; everything else gets one line.
fn describe(event: &CourseEvent) -> Option<String> {
    Some(match event {
        CourseEvent::CourseStarted => "== course started ==".to_string(),
        CourseEvent::ModuleEntered { module, label, .. } => {
            format!("-- {} ({label})", module.title())
        }
        CourseEvent::CaseStudySelected { id } => format!("   case study: {id}"),
        CourseEvent::ExerciseSelected { id } => format!("   exercise: {id}"),
        CourseEvent::CourseCompleted { elapsed_display } => {
            format!("== course completed in {elapsed_display} ==")
        }
        CourseEvent::CourseRestarted => "== course restarted ==".to_string(),
        CourseEvent::CertificateReady { certificate } => format!(
            "   certificate: {} — {} ({})",
            certificate.title, certificate.course, certificate.completed_on
        ),
        CourseEvent::SimulationStarted { banner, .. } => format!("   [sim] {banner}"),
        CourseEvent::AgentMoved { target, .. } => format!("   [sim] agent -> {target}"),
        CourseEvent::SimulationPrompt { text, .. } => format!("   [sim] {text}"),
        CourseEvent::SimulationResult { text, .. } => format!("   [sim] {text}"),
        CourseEvent::SimulationLine { number, text, .. } => format!("   [sim] {number}. {text}"),
        CourseEvent::SimulationCompleted { text, .. } => format!("   [sim] {text}"),
        CourseEvent::EnvironmentNote { text } => format!("   [env] {text}"),
        CourseEvent::TransactionAssessed {
            assessment,
            counters,
            ..
        } => format!(
            "   [fraud] ${:>8.2} {:<18} risk {:>5.1} -> {:<15} (safe {} / review {} / blocked {})",
            assessment.transaction.amount,
            assessment.transaction.merchant,
            assessment.risk_score,
            assessment.action,
            counters.safe,
            counters.suspicious,
            counters.blocked,
        ),
        CourseEvent::RecommendationsReady { items, metrics } => {
            let names: Vec<String> = items
                .iter()
                .map(|r| format!("{} ({}%)", r.product.name, r.match_pct))
                .collect();
            format!(
                "   [rec] top 3: {} | precision {:.1}% recall {:.1}% f1 {:.1}%",
                names.join(", "),
                metrics.precision,
                metrics.recall,
                metrics.f1,
            )
        }
        CourseEvent::PricesOptimized { cards, summary } => {
            let moves: Vec<String> = cards
                .iter()
                .map(|c| {
                    format!(
                        "{} ${:.0} -> ${:.0}",
                        c.product.name, c.product.current_price, c.optimized_price
                    )
                })
                .collect();
            format!(
                "   [price] {} | revenue {:+.1}% profit {:+.1}%",
                moves.join(", "),
                summary.revenue_change_pct,
                summary.profit_change_pct,
            )
        }
        CourseEvent::ChatMessage { author, text } => match author {
            course_core::chatbot::ChatAuthor::User => format!("   [chat] you: {text}"),
            course_core::chatbot::ChatAuthor::Bot => format!("   [chat] bot: {text}"),
        },
        // Per-second ticks and reveal cues would swamp the transcript.
        CourseEvent::TimerUpdated { .. }
        | CourseEvent::Reveal { .. }
        | CourseEvent::ChartReady { .. } => return None,
    })
}

fn print_summary(engine: &CourseEngine) {
    let state = engine.state();
    println!();
    println!("=== SESSION SUMMARY ===");
    println!("  session:   {}", state.session_id);
    println!(
        "  module:    {}",
        state
            .module
            .map(|m| m.title().to_string())
            .unwrap_or_else(|| "introduction".to_string())
    );
    println!("  progress:  {:.1}%", state.progress * 100.0);
    println!("  remaining: {}", state.timer_display);
    println!("  completed: {}", state.completed);
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
