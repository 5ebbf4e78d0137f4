use std::path::PathBuf;
use std::process::exit;
use std::sync::atomic::Ordering;

use filament_core::core::Machine as _;
use getopts::Options;

mod console;

fn print_usage(opts: &Options) {
    let brief = "Usage: filament [OPTIONS...]";
    print!("{}", opts.usage(brief));
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut opts = Options::new();
    opts.optopt("s", "system", "system to emulate (default: 6809)", "NAME");
    opts.optopt("c", "cpu", "override the CPU within the system", "NAME");
    opts.optopt("r", "rom", "ROM image to load instead of the default", "PATH");
    opts.optflag("h", "help", "display this help and exit");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("filament: {err}");
            print_usage(&opts);
            exit(1);
        }
    };

    if matches.opt_present("help") {
        print_usage(&opts);
        println!("\nAvailable systems:");
        for entry in filament_machines::registry::all() {
            println!("    {} ({} cpu, default rom {})", entry.name, entry.cpu, entry.default_rom);
        }
        exit(0);
    }

    if let Some(extra) = matches.free.first() {
        eprintln!("filament: unexpected argument '{extra}'");
        print_usage(&opts);
        exit(1);
    }

    let system = matches
        .opt_str("system")
        .unwrap_or_else(|| "6809".to_string());
    let cpu = matches.opt_str("cpu");
    let rom = matches.opt_str("rom").map(PathBuf::from);

    let console = console::Console::new();

    let mut machine = match filament_machines::build(
        &system,
        cpu.as_deref(),
        rom.as_deref(),
        console.port(),
    ) {
        Ok(machine) => machine,
        Err(err) => {
            console.restore();
            eprintln!("filament: {err}");
            exit(1);
        }
    };

    println!("starting system '{system}'");

    machine.reset();
    let shutdown = machine.shutdown_flag();
    let _reader = console.spawn_reader(shutdown.clone());

    // the CPU runs on its own thread until shutdown or a fatal fault;
    // the reader may still be blocked in read() when we exit
    let cpu_thread = std::thread::spawn(move || machine.run());
    let code = cpu_thread.join().unwrap_or(1);

    shutdown.store(true, Ordering::Relaxed);
    console.restore();
    exit(code);
}
