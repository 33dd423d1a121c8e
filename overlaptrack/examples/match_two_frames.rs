use ndarray::Array2;
use overlaptrack::{AssignmentStrategy, MatcherConfig, OverlapMatcher};

/// Two discs drifting right by `shift` pixels, background 0
fn frame(size: usize, shift: usize, labels: [u16; 2]) -> Array2<u16> {
    let centers = [(size / 3, size / 3), (2 * size / 3, 2 * size / 3)];
    let radius = (size / 6) as isize;
    Array2::from_shape_fn((size, size), |(r, c)| {
        for (&(cr, cc), &label) in centers.iter().zip(labels.iter()) {
            let dr = r as isize - cr as isize;
            let dc = c as isize - (cc + shift) as isize;
            if dr * dr + dc * dc <= radius * radius {
                return label;
            }
        }
        0
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let first = frame(60, 0, [1, 2]);
    // Segmentation of the next frame numbers the objects differently
    let second = frame(60, 3, [17, 5]);

    for strategy in [AssignmentStrategy::Greedy, AssignmentStrategy::Optimal] {
        let matcher = OverlapMatcher::new(
            MatcherConfig::default()
                .with_ignore_labels([0])
                .with_strategy(strategy),
        );
        let result = matcher.match_frames(first.view(), second.view())?;

        println!("{:?}:", strategy);
        for (current, next) in result.correspondences.iter() {
            println!("  {} -> {}", current, next);
        }
        println!("  total overlap: {} px", result.total_overlap);
        println!("  as JSON: {}", serde_json::to_string(&result)?);
    }

    Ok(())
}
