use std::fs::File;
use std::io::{Read, Write, BufReader, BufWriter};
use std::path::Path;
use csv;
use serde_json;
use super::super::cases::Case;
use super::leapfrog::EnergyRecord;

////////////////////////////////////////////////////////////////////////////////
//- Case files (JSON)
////////////////////////////////////////////////////////////////////////////////

pub fn read_case(case_path: &Path) -> Result<Case, String> {
    let case_file = match File::open(&case_path) {
        Err(why) => return Err(format!("Couldn't open case file '{}': {}", case_path.display(), why)),
        Ok(file) => file,
    };
    let mut reader = BufReader::new(case_file);
    let mut json_encoded = String::new();
    if let Err(why) = reader.read_to_string(&mut json_encoded) {
        return Err(format!("Couldn't read case file '{}': {}", case_path.display(), why));
    }
    serde_json::from_str(&json_encoded)
        .map_err(|why| format!("Couldn't decode case file '{}': {}", case_path.display(), why))
}

/// Write a case description, never replacing an existing file.
pub fn write_case(case_path: &Path, case: &Case) -> Result<(), String> {
    if case_path.exists() {
        return Err(format!("File '{}' already exists", case_path.display()));
    }
    let json_encoded = serde_json::to_string_pretty(case)
        .map_err(|why| format!("Couldn't encode case: {}", why))?;
    let case_file = File::create(&case_path)
        .map_err(|why| format!("Couldn't create case file '{}': {}", case_path.display(), why))?;
    let mut writer = BufWriter::new(case_file);
    writer.write_all(json_encoded.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|why| format!("Couldn't write case file '{}': {}", case_path.display(), why))
}

////////////////////////////////////////////////////////////////////////////////
//- Energy log (CSV)
////////////////////////////////////////////////////////////////////////////////

/// CSV writer for energy records; the header row is emitted with the first record.
pub fn get_energy_log_writer(energy_log_path: &Path) -> Result<csv::Writer<File>, String> {
    if energy_log_path.exists() {
        return Err(format!("File '{}' already exists", energy_log_path.display()));
    }
    csv::Writer::from_path(energy_log_path)
        .map_err(|why| format!("Couldn't create energy log '{}': {}", energy_log_path.display(), why))
}

pub fn write_energy_record<W: Write>(energy_log_writer: &mut csv::Writer<W>, record: &EnergyRecord) -> Result<(), String> {
    energy_log_writer.serialize(record)
        .map_err(|why| format!("Couldn't write energy record: {}", why))
}

pub fn flush_energy_log<W: Write>(energy_log_writer: &mut csv::Writer<W>) -> Result<(), String> {
    energy_log_writer.flush()
        .map_err(|why| format!("Couldn't flush energy log: {}", why))
}
