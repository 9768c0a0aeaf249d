mod bus;
mod cpu6502;
mod instructions;
mod opcodes;
mod rom;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::bus::{Bus, FlatBus, Mem};
use crate::cpu6502::{CPU, new_cpu, trace};
use crate::rom::Rom;

#[derive(Parser)]
#[command(name = "famicore", about = "MOS 6502 interpreter with the NES memory map")]
struct Args {
    /// iNES ROM image, or a raw machine-code image with --raw
    file: PathBuf,

    /// Treat the input as raw machine code instead of an iNES image
    #[arg(long)]
    raw: bool,

    /// Load address for --raw images
    #[arg(long, default_value = "0x0600", value_parser = parse_hex_u16)]
    load_base: u16,

    /// Override the program counter after reset (e.g. 0xC000 for nestest)
    #[arg(long, value_parser = parse_hex_u16)]
    start_pc: Option<u16>,

    /// Print a nestest-format trace line per instruction
    #[arg(long)]
    trace: bool,
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(digits, 16).map_err(|err| format!("invalid 16-bit hex address {s:?}: {err}"))
}

fn run_to_brk<M: Mem>(mut cpu: CPU<M>, start_pc: Option<u16>, with_trace: bool) {
    cpu.reset();
    if let Some(pc) = start_pc {
        cpu.program_counter = pc;
    }

    if with_trace {
        cpu.run_with_callback(|cpu| println!("{}", trace(cpu)));
    } else {
        cpu.run();
    }
    info!("Program hit BRK after {} cycles", cpu.cycles);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let bytes = fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    if args.raw {
        let mut cpu = new_cpu(FlatBus::new());
        cpu.load_program(&bytes, args.load_base);
        run_to_brk(cpu, args.start_pc, args.trace);
    } else {
        let rom = Rom::new(&bytes)
            .with_context(|| format!("failed to parse {}", args.file.display()))?;
        rom.check_validity()?;
        run_to_brk(new_cpu(Bus::new(rom)), args.start_pc, args.trace);
    }

    Ok(())
}
