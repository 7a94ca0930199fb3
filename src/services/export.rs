use crate::error::AppError;
use color_boundary::{ColorFormat, ColorValue, ExperimentKind, SampleColor};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const CSV_HEADER: &str = "BaseColorIndex,\
BaseColor_DisplayP3_R255,BaseColor_DisplayP3_G255,BaseColor_DisplayP3_B255,\
BaseColor_xyY_x,BaseColor_xyY_y,BaseColor_xyY_Y,\
BatchNumber,PositionInBatch,\
Color_DisplayP3_R255,Color_DisplayP3_G255,Color_DisplayP3_B255,\
Color_xyY_x,Color_xyY_y,Color_xyY_Y,\
DirectionIndex";

/// Display P3 as truncated 0–255 integers.
fn p3_bytes(color: ColorValue) -> [i64; 3] {
    let p3 = color.convert(ColorFormat::DisplayP301).components;
    p3.map(|c| (c * 255.0) as i64)
}

fn xyy_fields(xyy: [f64; 3]) -> String {
    format!("{:.6},{:.6},{:.6}", xyy[0], xyy[1], xyy[2])
}

/// Write every candidate every target's experiment would show, batch by
/// batch, as CSV. Returns the number of data rows.
///
/// No responses are fed back, so the experiments are only walked, never
/// resolved.
pub fn write_grid_csv<W: Write>(
    out: &mut W,
    targets: &[ColorValue],
    kind: ExperimentKind,
) -> Result<usize, AppError> {
    writeln!(out, "{CSV_HEADER}")?;
    let mut rows = 0usize;

    for (color_index, &base) in targets.iter().enumerate() {
        let [br, bg, bb] = p3_bytes(base);
        let base_xyy = xyy_fields(base.convert(ColorFormat::XyY).components);

        let mut experiment = kind.begin(base);
        for batch_number in 1..=experiment.total_batches() {
            let batch = experiment.next_batch(&[], &[]);
            for (position, sample) in batch.samples.iter().enumerate() {
                write_row(
                    out,
                    color_index,
                    [br, bg, bb],
                    &base_xyy,
                    batch_number,
                    position + 1,
                    sample,
                )?;
                rows += 1;
            }
            if !batch.has_more {
                break;
            }
        }
    }

    out.flush()?;
    Ok(rows)
}

fn write_row<W: Write>(
    out: &mut W,
    color_index: usize,
    base_p3: [i64; 3],
    base_xyy: &str,
    batch_number: usize,
    position: usize,
    sample: &SampleColor,
) -> std::io::Result<()> {
    let [r, g, b] = p3_bytes(sample.color);
    writeln!(
        out,
        "{color_index},{},{},{},{base_xyy},{batch_number},{position},{r},{g},{b},{},{}",
        base_p3[0],
        base_p3[1],
        base_p3[2],
        xyy_fields(sample.xyy()),
        sample.direction_index(),
    )
}

/// Export to a file, creating or truncating it.
pub fn export_grid(
    path: &Path,
    targets: &[ColorValue],
    kind: ExperimentKind,
) -> Result<usize, AppError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    let rows = write_grid_csv(&mut out, targets, kind)?;
    tracing::info!(path = %path.display(), rows, experiment = %kind, "Exported experiment grid");
    Ok(rows)
}
