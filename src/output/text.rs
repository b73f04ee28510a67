//! Human-readable text output

use super::report::Report;

/// Print a run report to the console
pub fn print_report(report: &Report) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                   SAMPLING RESULTS");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for job in &report.jobs {
        println!("{} ({} samples, seed {})", job.label, job.count, job.seed);
        println!("  Mean:     {:.6}", job.summary.mean);
        println!("  Variance: {:.6}", job.summary.variance);
        println!("  Std dev:  {:.6}", job.summary.std_dev);
        println!("  Min:      {:.6}", job.summary.min);
        println!("  Max:      {:.6}", job.summary.max);

        if let Some(values) = &job.values {
            println!("  Values:");
            for chunk in values.chunks(8) {
                let line: Vec<String> = chunk.iter().map(|v| format!("{:.6}", v)).collect();
                println!("    {}", line.join(" "));
            }
        }

        println!();
    }
}
