//! Build script for census-dashboard.
//!
//! Copies the six census table CSVs to OUT_DIR so they can be embedded via
//! `include_str!` at compile time. A missing fixture is replaced with its
//! header row, which loads as an empty table.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let files = [
        (
            "student_demographics.csv",
            "StudentID,Region,Gender,AgeSurveyed,YearSurveyed,BirthMonth",
        ),
        (
            "body_specifics.csv",
            "StudentDemographics_StudentID,Height,Armspan,FootLength",
        ),
        (
            "home_life.csv",
            "StudentDemographics_StudentID,HrsSpentWithFamily,HrsChores,HouseholdSize",
        ),
        (
            "misc_preferences.csv",
            "StudentDemographics_StudentID,MemoryGameScore,FavoriteSeason",
        ),
        (
            "social_activity.csv",
            "StudentDemographics_StudentID,HrsGames,HrsSocialMedia",
        ),
        (
            "world_issues.csv",
            "StudentDemographics_StudentID,AcademicPressure,ClimateConcern",
        ),
    ];

    for (name, header) in &files {
        let src_path = format!("../fixtures/{}", name);
        let src = Path::new(&src_path);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            check_header(src, header);
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, format!("{}\n", header)).unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using header-only placeholder",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}

/// Warn when a fixture's columns differ from what the loader expects.
fn check_header(path: &Path, expected: &str) {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            println!("cargo:warning=Cannot read {}: {}", path.display(), e);
            return;
        }
    };
    let actual = match reader.headers() {
        Ok(headers) => headers.iter().collect::<Vec<_>>().join(","),
        Err(e) => {
            println!("cargo:warning=Cannot read header of {}: {}", path.display(), e);
            return;
        }
    };
    if actual != expected {
        println!(
            "cargo:warning={} has columns '{}', expected '{}'",
            path.display(),
            actual,
            expected
        );
    }
}
