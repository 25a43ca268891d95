/// unbr – decompress brotli streams.
///
///   unbr file.br           → decompress to file (removes original)
///   unbr -c file.br        → decompress to stdout
///   unbr -k file.br        → keep original after decompressing
///   unbr -t file.br        → test integrity, write nothing
///   cat file.br | unbr     → decompress stdin to stdout
///
/// Exit codes mirror the decode result: 0 success, 1 usage or I/O error,
/// 2 out of memory, 3 premature end of input, 4 invalid stream,
/// 5 compare mismatch.
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use brotlidec::{decompress, DecodeError};

fn usage() {
    eprintln!("unbr - brotli decompression tool");
    eprintln!();
    eprintln!("Usage: unbr [OPTIONS] [FILE]...");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --stdout       Write to stdout (don't remove original)");
    eprintln!("  -k, --keep         Keep original file");
    eprintln!("  -f, --force        Overwrite existing output files");
    eprintln!("  -t, --test         Test integrity without writing output");
    eprintln!("  -q, --quiet        Suppress warnings");
    eprintln!("  -v, --verbose      Trace the decode (via the log facade)");
    eprintln!("  -h, --help         Show this help");
    eprintln!();
    eprintln!("If no FILE is given, reads from stdin and writes to stdout.");
    eprintln!("Compressed files are expected to use the .br extension.");
}

#[derive(Debug)]
struct Opts {
    to_stdout: bool,
    keep: bool,
    force: bool,
    test: bool,
    quiet: bool,
    verbose: bool,
    files: Vec<String>,
}

fn parse_args() -> Opts {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut opts = Opts {
        to_stdout: false,
        keep: false,
        force: false,
        test: false,
        quiet: false,
        verbose: false,
        files: Vec::new(),
    };

    for arg in &args {
        match arg.as_str() {
            "-c" | "--stdout" | "--to-stdout" => opts.to_stdout = true,
            "-k" | "--keep" => opts.keep = true,
            "-f" | "--force" => opts.force = true,
            "-t" | "--test" => opts.test = true,
            "-q" | "--quiet" => opts.quiet = true,
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => {
                usage();
                process::exit(0);
            }
            other if other.starts_with('-') && other.len() > 1 => {
                eprintln!("unbr: unknown option '{other}'");
                usage();
                process::exit(1);
            }
            file => opts.files.push(file.to_string()),
        }
    }
    opts
}

fn exit_code(err: DecodeError) -> i32 {
    match err {
        DecodeError::OutOfMemory => 2,
        DecodeError::ShortInput => 3,
        DecodeError::BadData(_) => 4,
        DecodeError::Mismatch => 5,
    }
}

/// Decode one buffer, reporting trailing input, and hand back the output.
fn decode(data: &[u8], name: &str, opts: &Opts) -> Result<Vec<u8>, i32> {
    let decoded = decompress(data);
    if let Err(err) = decoded.result {
        eprintln!("unbr: {name}: {err}");
        return Err(exit_code(err));
    }
    if !opts.quiet && decoded.consumed < data.len() {
        eprintln!(
            "unbr: {name}: warning: {} trailing bytes ignored",
            data.len() - decoded.consumed
        );
    }
    Ok(decoded.output)
}

fn process_file(path: &str, opts: &Opts) -> Result<(), i32> {
    let data = fs::read(path).map_err(|e| {
        eprintln!("unbr: {path}: {e}");
        1
    })?;
    let output = decode(&data, path, opts)?;

    if opts.test {
        return Ok(());
    }
    if opts.to_stdout {
        io::stdout().write_all(&output).map_err(|e| {
            eprintln!("unbr: {e}");
            1
        })?;
        return Ok(());
    }

    let out_path = match path.strip_suffix(".br") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => {
            eprintln!("unbr: {path}: unknown suffix, use -c to write to stdout");
            return Err(1);
        }
    };
    if !opts.force && Path::new(&out_path).exists() {
        eprintln!("unbr: {out_path}: already exists, use -f to overwrite");
        return Err(1);
    }
    fs::write(&out_path, &output).map_err(|e| {
        eprintln!("unbr: {out_path}: {e}");
        1
    })?;
    if !opts.keep {
        fs::remove_file(path).map_err(|e| {
            eprintln!("unbr: {path}: {e}");
            1
        })?;
    }
    Ok(())
}

fn process_stdin(opts: &Opts) -> Result<(), i32> {
    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data).map_err(|e| {
        eprintln!("unbr: stdin: {e}");
        1
    })?;
    let output = decode(&data, "stdin", opts)?;
    if !opts.test {
        io::stdout().write_all(&output).map_err(|e| {
            eprintln!("unbr: {e}");
            1
        })?;
    }
    Ok(())
}

fn main() {
    let opts = parse_args();
    env_logger::Builder::from_default_env()
        .filter_level(if opts.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let mut code = 0;
    if opts.files.is_empty() {
        if let Err(c) = process_stdin(&opts) {
            code = c;
        }
    } else {
        for file in &opts.files {
            if let Err(c) = process_file(file, &opts) {
                code = c;
            }
        }
    }
    process::exit(code);
}
