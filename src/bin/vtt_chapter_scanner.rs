use std::env;
use std::fs;
use std::process::ExitCode;
use vttchapters::{extract_chapters, format_timestamp, ChapterFormat};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: vtt_chapter_scanner <file.vtt> [titles|blocks]");
        eprintln!("Example: vtt_chapter_scanner tests/testdata/chapters.vtt blocks");
        return ExitCode::FAILURE;
    }
    let file_path = &args[1];

    match scan_chapters(file_path, args.get(2).map(String::as_str)) {
        Ok(count) => {
            println!("\nFound {} chapters", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Scan failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn scan_chapters(path: &str, format: Option<&str>) -> Result<usize, Box<dyn std::error::Error>> {
    let format = match format {
        Some(name) => name.parse::<ChapterFormat>()?,
        None => ChapterFormat::default(),
    };
    let transcript = fs::read_to_string(path)?;

    println!("File: {}", path);
    println!("Layout: {}", format);
    println!();

    let chapters = extract_chapters(&transcript, format)?;
    for chapter in &chapters {
        println!(
            "[{} --> {}] {}",
            format_timestamp(chapter.start),
            format_timestamp(chapter.end),
            chapter.text
        );
    }

    Ok(chapters.len())
}
