extern crate orrery;
extern crate clap;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use orrery::Integrator;
use orrery::constants::MAX_RELATIVE_ENERGY_ERROR;
use orrery::tools::timestamp;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

fn main() {
    let matches = Command::new("Orrery")
                            .version(env!("CARGO_PKG_VERSION"))
                            .about("Direct N-body integrator (kick-drift-kick leapfrog) with energy diagnostics.")
                            .subcommand(Command::new("start")
                                    .about("Start a simulation")
                                    .arg(Arg::new("case_filename")
                                        .required(true)
                                        .index(1)
                                        .help("JSON case description"))
                                    .arg(Arg::new("energy_log_filename")
                                        .long("energy-log")
                                        .value_name("csv")
                                        .help("Write energy diagnostics every energy log period to this CSV file"))
                                    .arg(Arg::new("time_limit")
                                        .long("time-limit")
                                        .value_name("time")
                                        .value_parser(value_parser!(f64))
                                        .help("Override the time limit of the case"))
                                    .arg(Arg::new("silent")
                                        .short('s')
                                        .long("silent")
                                        .action(ArgAction::SetTrue)
                                        .help("Only print INFO/WARNING/ERROR messages"))
                                     )
                            .subcommand(Command::new("example")
                                    .about("Write the rotating triangle case (three unit masses, G = 1)")
                                    .arg(Arg::new("case_filename")
                                        .required(true)
                                        .index(1)
                                        .help("JSON case description to create"))
                                    .arg(Arg::new("time_step")
                                        .long("time-step")
                                        .value_name("dt")
                                        .value_parser(value_parser!(f64))
                                        .default_value("0.001")
                                        .help("Integrator time step"))
                                    .arg(Arg::new("time_limit")
                                        .long("time-limit")
                                        .value_name("time")
                                        .value_parser(value_parser!(f64))
                                        .default_value("5.0")
                                        .help("Simulated time span"))
                                    )
                            .subcommand(Command::new("demo")
                                    .about("Advance the demo state (two approaching bodies and one at rest) by one step")
                                    .arg(Arg::new("time_step")
                                        .long("time-step")
                                        .value_name("dt")
                                        .value_parser(value_parser!(f64))
                                        .default_value("0.01")
                                        .help("Integrator time step"))
                                    )
                            .subcommand_required(true)
                            .arg_required_else_help(true)
                          .get_matches();

    let result = match matches.subcommand() {
        Some(("start", start_matches)) => start(start_matches),
        Some(("example", example_matches)) => example(example_matches),
        Some(("demo", demo_matches)) => demo(demo_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        println!("[ERROR {} UTC] {}", timestamp(), e);
        std::process::exit(1);
    }
}

fn required_filename<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a String, String> {
    matches.get_one::<String>(id).ok_or(format!("Missing argument '{}'", id))
}

fn start(start_matches: &ArgMatches) -> Result<(), String> {
    let t1 = Instant::now();
    let case_filename = required_filename(start_matches, "case_filename")?;
    let silent_mode = start_matches.get_flag("silent");

    let case = orrery::output::read_case(Path::new(case_filename))?;
    let mut universe_integrator = case.into_integrator()?;
    if let Some(time_limit) = start_matches.get_one::<f64>("time_limit") {
        universe_integrator.set_time_limit(*time_limit)?;
    }
    println!("[INFO {} UTC] LeapFrog integrator: {} bodies, time step {}, {} iterations.",
             timestamp(), universe_integrator.get_n_particles(), universe_integrator.time_step(), universe_integrator.n_iterations());

    let mut energy_log_writer = match start_matches.get_one::<String>("energy_log_filename") {
        Some(energy_log_filename) => Some(orrery::output::get_energy_log_writer(Path::new(energy_log_filename))?),
        None => None,
    };
    let initial_record = universe_integrator.energy_record();
    if let Some(writer) = energy_log_writer.as_mut() {
        orrery::output::write_energy_record(writer, &initial_record)?;
    }

    // Simulate
    loop {
        match universe_integrator.iterate() {
            Ok(energy_log_trigger) => {
                if energy_log_trigger {
                    let record = universe_integrator.energy_record();
                    if let Some(writer) = energy_log_writer.as_mut() {
                        orrery::output::write_energy_record(writer, &record)?;
                    }
                    if ! silent_mode {
                        print!("Time: {:0.3} | Relative energy error: {:0.2e}                    \r", record.time, record.relative_energy_error);
                        std::io::stdout().flush().ok();
                    }
                }
            },
            Err(e) => { println!("[INFO {} UTC] {} '{}'.", timestamp(), e, case_filename); break; }
        };
    }
    if let Some(writer) = energy_log_writer.as_mut() {
        orrery::output::flush_energy_log(writer)?;
    }

    let final_record = universe_integrator.energy_record();
    println!("[INFO {} UTC] Initial energy: {:.8}", timestamp(), initial_record.total_energy);
    println!("[INFO {} UTC] Final energy:   {:.8}", timestamp(), final_record.total_energy);
    println!("[INFO {} UTC] Relative error: {:.2e}", timestamp(), final_record.relative_energy_error);
    if final_record.relative_energy_error < MAX_RELATIVE_ENERGY_ERROR {
        println!("[INFO {} UTC] Energy is well conserved.", timestamp());
    } else {
        println!("[WARNING {} UTC] High energy error (above {:.0e}).", timestamp(), MAX_RELATIVE_ENERGY_ERROR);
    }
    println!("[INFO {} UTC] Execution time: {:.3} seconds", timestamp(), t1.elapsed().as_secs_f64());
    Ok(())
}

fn example(example_matches: &ArgMatches) -> Result<(), String> {
    let case_filename = required_filename(example_matches, "case_filename")?;
    let time_step = *example_matches.get_one::<f64>("time_step").ok_or("Missing time step")?;
    let time_limit = *example_matches.get_one::<f64>("time_limit").ok_or("Missing time limit")?;
    let case = orrery::cases::rotating_triangle_case(time_step, time_limit);
    case.validate()?;
    orrery::output::write_case(Path::new(case_filename), &case)?;
    println!("[INFO {} UTC] Case written to '{}'.", timestamp(), case_filename);
    Ok(())
}

fn demo(demo_matches: &ArgMatches) -> Result<(), String> {
    let time_step = *demo_matches.get_one::<f64>("time_step").ok_or("Missing time step")?;
    if !(time_step > 0.) || !time_step.is_finite() {
        return Err(format!("Time step must be positive and finite (got {})", time_step));
    }
    let gravity = orrery::GravityParameters::default();
    let state = orrery::cases::demo_state();
    let new_state = orrery::leapfrog::step(&state, time_step, &gravity);

    println!("[INFO {} UTC] State after one leapfrog step of {}:", timestamp(), time_step);
    for (i, body) in new_state.iter().enumerate() {
        let (position, velocity) = (body.position(), body.velocity());
        println!("Body {}: r = [{:8.5}, {:8.5}, {:8.5}], v = [{:8.5}, {:8.5}, {:8.5}]",
                 i, position.x, position.y, position.z, velocity.x, velocity.y, velocity.z);
    }
    println!("[INFO {} UTC] Total energy (initial): {:.6}", timestamp(), state.total_energy(&gravity));
    println!("[INFO {} UTC] Total energy (final):   {:.6}", timestamp(), new_state.total_energy(&gravity));
    Ok(())
}
