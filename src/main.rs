use clap::Parser;

use ratings::{
    cli::{Cli, ReportType},
    loader,
    report::AverageRatingReport,
};

fn main() {
    let cli = Cli::parse();
    let records = loader::load(&cli.files);
    if records.is_empty() {
        println!("No data to process, check your files.");
        return;
    }
    match cli.report {
        ReportType::AverageRating => {
            print!("{}", AverageRatingReport::from_records(&records));
        }
        // Unreachable while ReportType has one variant; kept for when the
        // set of reports grows.
        #[allow(unreachable_patterns)]
        _ => println!("Unknown report type."),
    }
}
