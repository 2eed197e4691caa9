//! Word Ladder CLI
//!
//! Interactive command-line interface for the word ladder solver.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use word_ladder::{load_dictionary, Dictionary, Ladder, LadderSolver};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn start(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['|', '/', '-', '\\'];
            let mut i = 0;
            while flag.load(Ordering::Relaxed) {
                print!("\r{} {}", frames[i % frames.len()], message);
                io::stdout().flush().unwrap();
                thread::sleep(Duration::from_millis(100));
                i += 1;
            }
            print!("\r{}\r", " ".repeat(message.len() + 2));
            io::stdout().flush().unwrap();
        });
        Self { running, handle: Some(handle) }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

/// Prompt until the user enters a dictionary word (returned lowercased) or
/// an empty line, which means quit.
fn prompt_word(dictionary: &Dictionary, prompt: &str) -> Option<String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", prompt);
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            // EOF quits like an empty line.
            return None;
        }

        let word = line.trim().to_lowercase();
        if word.is_empty() {
            return None;
        }
        if dictionary.contains(&word) {
            return Some(word);
        }
        println!("Your response needs to be an English word, so please try again.");
    }
}

/// Prompt until the destination is a dictionary word of the same length as
/// the source.
fn prompt_destination(dictionary: &Dictionary, source: &str) -> Option<String> {
    loop {
        let word = prompt_word(
            dictionary,
            "Please enter the destination word [return to quit]: ",
        )?;
        if word.len() == source.len() {
            return Some(word);
        }
        println!("The two endpoints must contain the same number of characters, or else no word ladder can exist.");
    }
}

fn print_outcome(ladder: Option<&[String]>, source: &str, destination: &str) {
    match ladder {
        Some(ladder) => println!("Found ladder: {}", ladder.join(" ")),
        None => println!(
            "No word ladder between \"{}\" and \"{}\" could be found.",
            source, destination
        ),
    }
}

fn run_interactive(dictionary: Dictionary) {
    print_banner();

    println!("Loaded {} words.", dictionary.len());
    println!();
    println!("Give me two English words, and I will change the first into the");
    println!("second by changing one letter at a time.");
    println!();

    let solver = LadderSolver::new(dictionary);

    loop {
        let source = match prompt_word(
            solver.dictionary(),
            "Please enter the source word [return to quit]: ",
        ) {
            Some(word) => word,
            None => break,
        };
        let destination = match prompt_destination(solver.dictionary(), &source) {
            Some(word) => word,
            None => break,
        };

        let result = solver.shortest_ladder(&source, &destination);
        print_outcome(result.as_deref(), &source, &destination);
        println!();
    }

    println!();
    println!("Thanks for playing!");
}

fn run_find(dictionary: Dictionary, source: &str, destination: &str) {
    for word in [source, destination] {
        if !dictionary.contains(word) {
            eprintln!("\"{}\" is not a word in the dictionary.", word);
            std::process::exit(1);
        }
    }
    if source.len() != destination.len() {
        eprintln!("The two endpoints must contain the same number of characters, or else no word ladder can exist.");
        std::process::exit(1);
    }

    let solver = LadderSolver::new(dictionary);
    let result: Option<Ladder> = solver.shortest_ladder(source, destination);
    print_outcome(result.as_deref(), source, destination);

    if let Some(ladder) = &result {
        println!("{} words, {} hops.", ladder.len(), ladder.len() - 1);
    }
}

fn run_reach(dictionary: Dictionary, word: &str) {
    if !dictionary.contains(word) {
        eprintln!("\"{}\" is not a word in the dictionary.", word);
        std::process::exit(1);
    }

    let solver = LadderSolver::new(dictionary);
    let distances = solver.reachable_from(word);
    let reachable = distances.len() - 1;

    println!();
    println!(
        "{} words are reachable from {}.",
        reachable,
        word.to_uppercase()
    );

    if reachable == 0 {
        println!("{} has no one-letter neighbors at all.", word.to_uppercase());
        println!();
        return;
    }

    let max_hops = distances.values().max().copied().unwrap_or(0);
    let mut counts = vec![0usize; max_hops + 1];
    for &hops in distances.values() {
        counts[hops] += 1;
    }

    println!();
    println!("Hop distribution:");
    for (hops, count) in counts.iter().enumerate().skip(1) {
        let bar = "█".repeat((count * 40 / reachable).max(1));
        println!("  {} hops: {:>5}  {}", hops, count, bar);
    }

    let mut farthest: Vec<&String> = distances
        .iter()
        .filter(|&(_, &hops)| hops == max_hops)
        .map(|(word, _)| word)
        .collect();
    farthest.sort();
    farthest.truncate(8);

    println!();
    println!(
        "Farthest words ({} hops): {}",
        max_hops,
        farthest
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!();
}

fn most_common_length(dictionary: &Dictionary) -> usize {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for word in dictionary.iter() {
        *counts.entry(word.len()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(length, count)| (count, std::cmp::Reverse(length)))
        .map(|(length, _)| length)
        .unwrap_or(0)
}

fn run_benchmark(dictionary: Dictionary, length: Option<usize>) {
    let length = length.unwrap_or_else(|| most_common_length(&dictionary));
    let count = dictionary.words_of_length(length).count();
    if count == 0 {
        eprintln!("The dictionary has no words of length {}.", length);
        std::process::exit(1);
    }

    let solver = LadderSolver::new(dictionary);

    println!("Surveying {} words of length {}...", count, length);

    let spinner = Spinner::start("Searching...");
    let start = std::time::Instant::now();
    let stats = solver.connectivity_stats(length);
    let elapsed = start.elapsed();
    spinner.stop();

    println!("Results:");
    println!("{}", "=".repeat(40));
    println!("Words of length {}: {}", stats.word_length, stats.word_count);
    println!("Isolated words (no neighbors): {}", stats.isolated_words);
    println!("Average reachable words: {:.1}", stats.average_reachable);
    match &stats.longest_pair {
        Some((from, to)) => println!(
            "Longest shortest ladder: {} hops ({} → {})",
            stats.diameter,
            from.to_uppercase(),
            to.to_uppercase()
        ),
        None => println!("No two words of this length connect."),
    }
    println!("Time elapsed: {:.2?}", elapsed);
}

/// Pull `--dict <path>` out of the argument list, if present.
fn extract_dict_arg(args: &mut Vec<String>) -> Result<Option<String>, String> {
    if let Some(pos) = args.iter().position(|arg| arg == "--dict") {
        if pos + 1 >= args.len() {
            return Err("--dict requires a path to a word-list file".to_string());
        }
        let path = args.remove(pos + 1);
        args.remove(pos);
        return Ok(Some(path));
    }
    Ok(None)
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let dictionary = match extract_dict_arg(&mut args) {
        Ok(Some(path)) => match Dictionary::from_file(&path) {
            Ok(dictionary) => dictionary,
            Err(err) => {
                eprintln!("Could not load word list from {}: {}", path, err);
                std::process::exit(1);
            }
        },
        Ok(None) => load_dictionary(),
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    if args.is_empty() {
        run_interactive(dictionary);
        return;
    }

    match args[0].as_str() {
        "--help" | "-h" => {
            println!("{}", USAGE_TEXT);
        }
        "find" => {
            if args.len() < 3 {
                eprintln!("Usage: word-ladder find <source> <destination>");
                std::process::exit(1);
            }
            let source = args[1].to_lowercase();
            let destination = args[2].to_lowercase();
            run_find(dictionary, &source, &destination);
        }
        "reach" => {
            if args.len() < 2 {
                eprintln!("Usage: word-ladder reach <word>");
                std::process::exit(1);
            }
            let word = args[1].to_lowercase();
            run_reach(dictionary, &word);
        }
        "benchmark" | "bench" => {
            let length = match args.get(1) {
                Some(raw) => match raw.parse::<usize>() {
                    Ok(length) => Some(length),
                    Err(_) => {
                        eprintln!("Word length must be a number, got \"{}\".", raw);
                        std::process::exit(1);
                    }
                },
                None => None,
            };
            run_benchmark(dictionary, length);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    }
}
