//! Precise Predictor entry point
//!
//! Runs one prediction scenario and prints the escape range and the three
//! candidate futures as JSON. Usage: `precise-predictor [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use precise_predictor::Settings;

    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    match report::run(&settings) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm
}

#[cfg(not(target_arch = "wasm32"))]
mod report {
    use serde::Serialize;

    use precise_predictor::sim::{
        EscapeAngle, PredictedPoint, Wave, generate_on_wave_impact,
        get_better_maximum_escape_angle,
    };
    use precise_predictor::{Settings, max_escape_angle};

    #[derive(Serialize)]
    struct Report {
        escape: EscapeAngle,
        /// Straight-line bound, for comparison
        classic_escape_angle: f64,
        forward_impact: Option<PredictedPoint>,
        reverse_impact: Option<PredictedPoint>,
        stop_impact: Option<PredictedPoint>,
    }

    pub fn run(settings: &Settings) -> serde_json::Result<String> {
        let battlefield = settings.battlefield();
        let field = settings.inset_field();
        let initial = settings.initial_state();
        let wave = settings.bullet_wave();
        let direction = settings.direction.signum();

        log::info!(
            "Predicting {} orbit against wave at ({:.1}, {:.1}), speed {:.1}",
            settings.direction.as_str(),
            wave.origin().x,
            wave.origin().y,
            wave.expansion_speed()
        );

        let escape = get_better_maximum_escape_angle(
            &battlefield,
            &field,
            settings.stick_length,
            &initial,
            &wave,
            direction,
        );
        let futures = generate_on_wave_impact(
            &battlefield,
            &field,
            settings.stick_length,
            &initial,
            &wave,
            direction,
        );
        if !escape.converged {
            log::warn!("Escape range is partial: wave did not pass within the tick limit");
        }

        let report = Report {
            escape,
            classic_escape_angle: max_escape_angle(wave.expansion_speed()),
            forward_impact: futures.forward.last().copied(),
            reverse_impact: futures.reverse.last().copied(),
            stop_impact: futures.stop.last().copied(),
        };
        serde_json::to_string_pretty(&report)
    }
}
