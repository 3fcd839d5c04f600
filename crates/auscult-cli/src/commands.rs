//! Command implementations for the auscult binary.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use auscult_spec::{ConditionKind, SynthesisProfile};
use auscult_synth::noise::noise;
use auscult_synth::rng::{create_rng, derive_component_seed};
use auscult_synth::{generate, resample};

/// Leading samples considered for the preview sketch.
const PREVIEW_CAP: usize = 1024;
/// Preview sketch width in columns.
const PREVIEW_WIDTH: usize = 64;

/// Parameters of one `generate` invocation.
pub(crate) struct GenerateRequest {
    pub condition: String,
    pub samples: usize,
    pub cycles: u32,
    pub seed: u32,
    pub series: usize,
    pub scale: f64,
    pub extra_noise: f64,
    pub output: Option<String>,
    pub preview: bool,
}

/// Prints the condition catalogue.
pub(crate) fn list() -> Result<()> {
    for kind in ConditionKind::ALL {
        let category = match kind.profile() {
            SynthesisProfile::Cardiac(_) => "cardiac",
            SynthesisProfile::Fetal(_) => "fetal",
            SynthesisProfile::Respiratory(_) => "respiratory",
        };
        println!(
            "{:<22} {:<12} {}",
            kind.id().green().bold(),
            category.dimmed(),
            kind.label()
        );
    }
    Ok(())
}

/// Generates one dataset: `series` repetitions of the same request, each
/// on an independently derived seed, serialized as
/// `timestamp,value,type,series` rows.
pub(crate) fn generate_dataset(req: &GenerateRequest) -> Result<()> {
    let kind = ConditionKind::from_id(&req.condition);

    let mut out: Box<dyn Write> = match &req.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {path}"))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    writeln!(out, "timestamp,value,type,series")?;

    let mut first_series = Vec::new();
    for series in 0..req.series {
        let seed = derive_component_seed(req.seed, &format!("series-{series}"));
        let mut samples = generate(kind.id(), req.samples, req.cycles, seed)?;

        // Display-side tweaks keeping repeated series visually distinct;
        // the core output itself is untouched.
        let mut display_rng = create_rng(derive_component_seed(seed, "display-noise"));
        for v in samples.iter_mut() {
            *v = *v * req.scale + noise(&mut display_rng, req.extra_noise);
        }

        for (i, v) in samples.iter().enumerate() {
            writeln!(out, "{i},{v},{id},{series}", id = kind.id())?;
        }
        if series == 0 {
            first_series = samples;
        }
    }
    out.flush()?;

    if req.preview {
        eprintln!("{} {}", kind.id().green().bold(), sketch(&first_series));
    }
    Ok(())
}

/// Min/max-normalized polyline sketch of the leading samples.
fn sketch(samples: &[f64]) -> String {
    const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    let lead = &samples[..samples.len().min(PREVIEW_CAP)];
    if lead.is_empty() {
        return String::new();
    }
    let t: Vec<f64> = (0..lead.len()).map(|i| i as f64).collect();
    let line = resample(&t, lead, PREVIEW_WIDTH);

    let min = line.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = line.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::EPSILON);

    line.iter()
        .map(|v| {
            let u = (v - min) / span;
            let idx = ((u * (GLYPHS.len() - 1) as f64).round() as usize).min(GLYPHS.len() - 1);
            GLYPHS[idx]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sketch_width_is_capped() {
        let samples: Vec<f64> = (0..5000).map(|i| (i as f64 * 0.01).sin()).collect();
        assert_eq!(sketch(&samples).chars().count(), PREVIEW_WIDTH);
    }

    #[test]
    fn test_sketch_normalizes_extremes() {
        // A ramp touches both the lowest and the highest glyph
        let samples: Vec<f64> = (0..PREVIEW_CAP).map(|i| i as f64).collect();
        let s = sketch(&samples);
        assert!(s.starts_with('▁'));
        assert!(s.ends_with('█'));
    }

    #[test]
    fn test_sketch_of_flat_signal_does_not_blow_up() {
        let samples = vec![3.25; 100];
        let s = sketch(&samples);
        assert_eq!(s.chars().count(), PREVIEW_WIDTH);
    }

    #[test]
    fn test_empty_sketch() {
        assert_eq!(sketch(&[]), "");
    }
}
