use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;

use circuit_rs::circuit::Circuit;
use circuit_rs::demo::Demo;
use circuit_rs::simulation::SimulationConfig;
use circuit_rs::truth_table::combination_count;

#[derive(Debug, Parser)]
#[command(author, version, about = "Simulate a logic circuit and print its truth table")]
struct Cli {
    /// Netlist file to load.
    #[arg(short, long, value_name = "FILE", conflicts_with = "demo")]
    input: Option<PathBuf>,

    /// Preset circuit: and, or, not, xor. Without this or `--input`, the starter circuit is used.
    #[arg(short, long, value_name = "GATE")]
    demo: Option<Demo>,

    /// Switch labels to flip before simulating.
    #[arg(short, long, value_name = "LABEL")]
    toggle: Vec<String>,

    /// Maximum number of switches to enumerate.
    #[arg(long, value_name = "INT", default_value = "16")]
    max_inputs: usize,

    /// Maximum number of simulation passes.
    #[arg(long, value_name = "INT", default_value = "50")]
    max_iterations: usize,

    /// Write the (possibly toggled) circuit back out as a netlist.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut circuit = match (&args.input, args.demo) {
        (Some(path), _) => Circuit::load(path)?,
        (None, Some(demo)) => demo.build(),
        (None, None) => Circuit::starter(),
    };
    println!(
        "circuit: {} nodes, {} wires",
        circuit.len(),
        circuit.connections().len()
    );

    for label in &args.toggle {
        let node = circuit
            .inputs()
            .into_iter()
            .find(|n| &n.label == label)
            .map(|n| n.id)
            .ok_or_else(|| eyre!("no switch labelled {:?}", label))?;
        let state = circuit.toggle_input(node)?;
        println!("toggled {} -> {}", label, state as u8);
    }

    let config = SimulationConfig {
        max_iterations: args.max_iterations,
    };
    let values = circuit.simulate_with_config(&config);
    for out in circuit.outputs() {
        let lit = values.get(&out.id).copied().unwrap_or(false);
        println!("{} = {}", out.label, lit as u8);
    }

    let num_inputs = circuit.inputs().len();
    if num_inputs > args.max_inputs {
        println!(
            "Not enumerating {} switches ({} rows); raise --max-inputs to force it.",
            num_inputs,
            combination_count(num_inputs)
        );
    } else {
        let time_table = std::time::Instant::now();
        let table = circuit.truth_table_with_config(&config)?;
        println!();
        print!("{}", table);
        log::info!("{} rows in {:.3}s", table.num_rows(), time_table.elapsed().as_secs_f64());
    }

    if let Some(path) = &args.output {
        circuit.save(path)?;
        println!("saved to {}", path.display());
    }

    Ok(())
}
