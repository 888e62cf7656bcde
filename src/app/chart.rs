use crate::algo::series::StepSeries;
use crate::algo::sorting::Algorithm;

const BAR: &str = "█";
const RESET_FG: &str = "\x1b[39m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// cells of the longest bar
    pub width: usize,
    pub color: bool,
}

fn color_of(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bubble => "\x1b[31m",
        Algorithm::Merge => "\x1b[34m",
        Algorithm::Quick => "\x1b[36m",
    }
}

// rounds up so any non-zero count gets at least one cell
fn bar_len(steps: u64, max: u64, width: usize) -> usize {
    match (steps, max) {
        (0, _) | (_, 0) => 0,
        (steps, max) => {
            let scaled = (steps as u128 * width as u128 + max as u128 - 1) / max as u128;
            scaled as usize
        }
    }
}

fn build_bar(algorithm: Algorithm, len: usize, color: bool) -> String {
    match len {
        0 => String::new(),
        len if color => format!("{}{}{} ", color_of(algorithm), BAR.repeat(len), RESET_FG),
        len => format!("{} ", BAR.repeat(len)),
    }
}

/*
* one block of rows per size, one row per algorithm:
*    10 | Bubble Sort | ████ 45
*       | Merge Sort  | ██ 22
*/
pub fn render(series: &StepSeries, options: &ChartOptions) -> String {
    let max = series.max_steps();
    let label_width = series
        .datasets
        .iter()
        .map(|d| d.algorithm.label().len())
        .max()
        .unwrap_or(0)
        .max("algorithm".len());
    let header = format!(
        "Steps per array size\n{:>5} | {:<w$} | {}\n",
        "size",
        "algorithm",
        "steps",
        w = label_width
    );
    series
        .sizes
        .iter()
        .enumerate()
        .fold(header, |acc, (column, size)| {
            series
                .datasets
                .iter()
                .enumerate()
                .fold(acc, |acc, (row, dataset)| {
                    let steps = dataset.steps.get(column).copied().unwrap_or(0);
                    let size_cell = if row == 0 { size.to_string() } else { String::new() };
                    let bar = build_bar(
                        dataset.algorithm,
                        bar_len(steps, max, options.width),
                        options.color,
                    );
                    acc + &format!(
                        "{:>5} | {:<w$} | {}{}\n",
                        size_cell,
                        dataset.algorithm.label(),
                        bar,
                        steps,
                        w = label_width
                    )
                })
        })
}
