use micro_gesture::{Event, GestureConfig, GestureRecognizers};
use rand::{rngs::StdRng, Rng, SeedableRng};

const RESOLUTION: usize = 256;
const TICK_RATE: f32 = 60.0;

/// Low level background noise.
fn noise_frame(rng: &mut StdRng) -> Vec<f32> {
    (0..RESOLUTION).map(|_| rng.gen_range(0.0..0.02)).collect()
}

/// A broadband transient with many small peaks.
fn click_frame(rng: &mut StdRng) -> Vec<f32> {
    (0..RESOLUTION)
        .map(|i| {
            let level = if i % 2 == 1 { 0.3 } else { 0.1 };
            level + rng.gen_range(0.0..0.01)
        })
        .collect()
}

/// A single tonal peak at `bin` over background noise.
fn whistle_frame(rng: &mut StdRng, bin: usize) -> Vec<f32> {
    let mut frame = noise_frame(rng);
    frame[bin] = 0.9;
    frame
}

fn describe<T: std::fmt::Debug>(event: &Event<T>) -> String {
    match event {
        Event::Onset(value) => format!("onset {:?}", value),
        Event::Tick(value) => format!("tick {:?}", value),
        Event::Release(value) => format!("release {:?}", value),
    }
}

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(1);
    let mut recognizers = GestureRecognizers::new(GestureConfig::new(RESOLUTION))
        .expect("the default configuration is valid");
    let dt = 1.0 / TICK_RATE;

    // A short click, some silence, then a whistle sweeping up through its band.
    let mut frames: Vec<Vec<f32>> = Vec::new();
    frames.extend((0..3).map(|_| click_frame(&mut rng)));
    frames.extend((0..40).map(|_| noise_frame(&mut rng)));
    frames.extend((0..80).map(|i| whistle_frame(&mut rng, 90 + i / 2)));
    frames.extend((0..40).map(|_| noise_frame(&mut rng)));

    println!("Processing {} frames of {} bins", frames.len(), RESOLUTION);
    for (tick, frame) in frames.iter().enumerate() {
        let output = recognizers.process(frame, dt);
        if let Some(event) = output.click.event {
            println!(
                "{:>4} | click   {:.2} | {}",
                tick,
                output.click.score,
                describe(&event)
            );
        }
        if let Some(event) = output.whistle.event {
            println!(
                "{:>4} | whistle {:.2} | {}",
                tick,
                output.whistle.score,
                describe(&event)
            );
        }
    }
}
