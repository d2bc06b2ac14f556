//! AruXI simulator CLI.
//!
//! This binary boots a raw kernel image on the AruXI core. It performs:
//! 1. **Setup:** Loads the configuration and the image, then boots the core on its own thread.
//! 2. **I/O Service:** Services I/O halts on the host's stdin and stdout and acknowledges them.
//! 3. **Fault Reporting:** Writes a process dump on guest aborts and exits non-zero on fatal faults.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aruxi_core::common::constants::KERN_TEXT;
use aruxi_core::config::Config;
use aruxi_core::sim::coredump;
use aruxi_core::sim::loader;
use aruxi_core::sim::signals::{FaultKind, FaultReport, IoOperation, IoRequest, SignalAdapter, SignalError};
use aruxi_core::sim::{AckKind, IdleReason, Simulator};
use aruxi_core::soc::AddressSpace;

#[derive(Parser, Debug)]
#[command(
    name = "aruxi",
    author,
    version,
    about = "AruXI 32-bit CPU simulator",
    long_about = "Boot a raw AruXI kernel image and run it until the core goes idle.\n\nExamples:\n  aruxi kernel.bin\n  aruxi kernel.bin --config sim.json --stats\n  aruxi kernel.bin --load-addr 0xB8080000 --entry 0xB8080000 --trace"
)]
struct Cli {
    /// Raw kernel image to load.
    image: PathBuf,

    /// Address the image is loaded at.
    #[arg(long, value_parser = parse_addr, default_value_t = KERN_TEXT)]
    load_addr: u32,

    /// Boot entry point (defaults to the configured entry).
    #[arg(long, value_parser = parse_addr)]
    entry: Option<u32>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit per-stage instruction traces.
    #[arg(long)]
    trace: bool,

    /// File a process dump is written to when a guest process aborts.
    #[arg(long, default_value = "iaru0.admp")]
    dump_path: PathBuf,

    /// Print simulation statistics on exit.
    #[arg(long)]
    stats: bool,
}

fn parse_addr(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

/// Host buffer size for guest I/O. The guest picks the length, so transfers
/// are streamed through this many bytes at a time.
const IO_CHUNK: usize = 4096;

/// Streams `request.length` bytes of guest memory to `out`.
fn copy_out(memory: &AddressSpace, request: &IoRequest, out: &mut impl Write) -> io::Result<()> {
    let mut chunk = [0u8; IO_CHUNK];
    let mut done = 0u32;
    while done < request.length {
        let n = (request.length - done).min(IO_CHUNK as u32);
        let part = &mut chunk[..n as usize];
        memory.read_bytes(request.buffer.wrapping_add(done), part);
        out.write_all(part)?;
        done += n;
    }
    out.flush()
}

/// Reads up to `request.length` bytes from `input` into guest memory.
///
/// Stops at the first short read, so an interactive stream returns what it
/// has instead of blocking for the full length.
///
/// # Returns
///
/// The number of bytes stored.
fn copy_in(
    memory: &mut AddressSpace,
    request: &IoRequest,
    input: &mut impl Read,
) -> io::Result<u32> {
    let mut chunk = [0u8; IO_CHUNK];
    let mut done = 0u32;
    while done < request.length {
        let want = (request.length - done).min(IO_CHUNK as u32) as usize;
        let n = input.read(&mut chunk[..want])?;
        memory.write_bytes(request.buffer.wrapping_add(done), &chunk[..n]);
        done += n as u32;
        if n < want {
            break;
        }
    }
    Ok(done)
}

/// Services guest I/O on the host's standard streams and writes process dumps.
#[derive(Debug)]
struct StdioAdapter {
    dump_path: PathBuf,
}

impl StdioAdapter {
    fn write_dump(&self, report: &FaultReport) {
        let Some(process) = &report.process else {
            return;
        };
        match fs::write(&self.dump_path, coredump::render(process)) {
            Ok(()) => eprintln!("[*] Process dump written to {}", self.dump_path.display()),
            Err(e) => tracing::error!("could not write {}: {e}", self.dump_path.display()),
        }
    }
}

impl SignalAdapter for StdioAdapter {
    fn deliver_fault(&mut self, report: &FaultReport) {
        match &report.kind {
            FaultKind::GuestAbort(excp) => {
                eprintln!("\n[!] Process aborted: {}", excp.label());
                self.write_dump(report);
            }
            FaultKind::Fatal(fault) => {
                eprintln!("\n[!] FATAL: {fault}");
                match serde_json::to_string_pretty(report) {
                    Ok(json) => eprintln!("{json}"),
                    Err(e) => tracing::error!("could not serialize fault report: {e}"),
                }
            }
        }
    }

    fn request_io(
        &mut self,
        request: &IoRequest,
        memory: &mut AddressSpace,
    ) -> Result<(), SignalError> {
        let io_err = |e: io::Error| SignalError::Io(e.to_string());
        match request.operation {
            IoOperation::Write => {
                copy_out(memory, request, &mut io::stdout().lock()).map_err(io_err)
            }
            IoOperation::Read => {
                let n = copy_in(memory, request, &mut io::stdin().lock()).map_err(io_err)?;
                memory.write_u32(request.descriptor.wrapping_add(4), n);
                Ok(())
            }
            IoOperation::Unknown(stream) => {
                tracing::warn!(stream, "ignoring I/O request on unknown stream");
                Ok(())
            }
        }
    }
}

fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("aruxi_core=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let mut config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;
    if let Some(entry) = cli.entry {
        config.boot.entry = entry;
    }

    let image = match loader::load_file(&cli.image) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let adapter = StdioAdapter {
        dump_path: cli.dump_path.clone(),
    };
    let mut sim = Simulator::new(&config, Box::new(adapter));
    if let Err(e) = sim.load_image(cli.load_addr, &image) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    println!(
        "[*] Booting {} ({} bytes at {:#010x}, entry {:#010x})",
        cli.image.display(),
        image.len(),
        cli.load_addr,
        config.boot.entry
    );
    sim.boot();
    let core = sim.spawn();

    let mut code = ExitCode::SUCCESS;
    while let Some(reason) = core.wait_idle() {
        match reason {
            IdleReason::IoWait(_) => {
                if let Err(e) = core.acknowledge(AckKind::Io) {
                    eprintln!("Error: {e}");
                    code = ExitCode::FAILURE;
                    break;
                }
            }
            IdleReason::Aborted(_) => {
                if let Err(e) = core.acknowledge(AckKind::Fault) {
                    eprintln!("Error: {e}");
                }
                code = ExitCode::FAILURE;
                break;
            }
            IdleReason::Halted | IdleReason::Exited | IdleReason::Paused => break,
            IdleReason::Fatal(_) => {
                code = ExitCode::FAILURE;
                break;
            }
        }
    }

    match core.shutdown() {
        Ok(sim) => {
            if cli.stats {
                sim.cpu.stats.print();
            }
            code
        }
        Err(e) => {
            eprintln!("[!] {e}");
            ExitCode::FAILURE
        }
    }
}
