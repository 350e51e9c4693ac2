use anyhow::anyhow;
use argh::FromArgs;
use log::*;

use crate::app::App;
use crate::dictionary::Glossary;
use crate::wordle::{LetterFeedback, LetterStatus};
use crate::words::{Mode, WordList};

mod app;
mod dictionary;
mod error;
mod language;
mod leaderboard;
mod session;
mod wordle;
mod words;

#[cfg(test)]
mod leaderboard_test;
#[cfg(test)]
mod wordle_test;

/// render_row takes one guess's feedback and returns a two-line string: a
/// row of colored squares over the guessed letters.
fn render_row(feedback: &[LetterFeedback]) -> String {
    let mut s = String::new();
    for f in feedback {
        s.push(match f.status {
            LetterStatus::Correct => '\u{1F7E9}',
            LetterStatus::Present => '\u{1F7E8}',
            LetterStatus::Absent => '\u{2B1B}',
        });
        s.push(' ');
    }
    s.push('\n');
    for f in feedback {
        s.push(f.letter.to_uppercase().next().unwrap_or(f.letter));
        s.push(' ');
    }
    s
}

#[derive(FromArgs)]
/// Play a game of Wurdle in the terminal.
struct Args {
    /// directory of word list files, named <lang>_<length>_<mode>.txt
    #[argh(option, short = 'w', default = "String::from(\"words\")")]
    words: String,

    /// language code: en, ga, fr or es
    #[argh(option, short = 'l', default = "String::from(\"en\")")]
    language: String,

    /// word length
    #[argh(option, short = 'n', default = "5")]
    length: usize,

    /// difficulty mode: normal or advanced
    #[argh(option, short = 'm', default = "String::from(\"normal\")")]
    mode: String,

    /// file where high scores are kept
    #[argh(option, short = 's', default = "String::from(\"scores.json\")")]
    scores: String,

    /// JSON glossary of word definitions
    #[argh(option, short = 'g')]
    glossary: Option<String>,

    /// name to record winning times under
    #[argh(option, default = "String::from(\"anonymous\")")]
    name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();

    let words = WordList::load_dir(&args.words)?;
    let mode = Mode::from_code(&args.mode).ok_or(anyhow!("unknown mode: {}", args.mode))?;
    let glossary = match &args.glossary {
        Some(path) => Glossary::from_file(path)?,
        None => Glossary::default(),
    };

    let mut app = App::new(words, glossary);
    app.set_save_path(&args.scores);
    app.load().await?;

    let mut session = app.start_game(&args.language, args.length, mode)?;
    println!(
        "Guess the {}-letter word. You have {} tries.",
        args.length,
        session::MAX_GUESSES
    );

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            info!("Input closed, abandoning game");
            return Ok(());
        }
        let guess = line.trim();
        if guess.is_empty() {
            continue;
        }

        let reply = match app.submit_guess(&mut session, guess).await {
            Ok(reply) => reply,
            Err(e) => {
                println!("{}. Try again.", e);
                continue;
            }
        };

        println!("{}", render_row(&reply.feedback));
        if !reply.game_over {
            let used = session
                .used_letters()
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("Used letters: {}\nNext guess?", used);
            continue;
        }

        let target = reply.target_word.unwrap_or_default();
        if reply.correct {
            let time = reply.time_taken.unwrap_or_default();
            println!("You won in {:.1}s! The word was {}.", time, target);
            match app
                .submit_score(&args.name, time, args.length, &args.language)
                .await?
            {
                Some(rank) => println!("You placed #{} on the leaderboard.", rank),
                None => println!("Not a top time this round."),
            }
        } else {
            println!("You lost! The word was {}.", target);
        }
        if let Some(definition) = reply.definition {
            println!("Definition: {}", definition);
        }

        let scores = app.scores(args.length, &args.language).await?;
        if !scores.is_empty() {
            println!("\nHigh scores ({}-letter, {}):", args.length, args.language);
            for (i, score) in scores.iter().enumerate() {
                println!("{:>3}. {:<20} {:.1}s", i + 1, score.name, score.time);
            }
        }
        return Ok(());
    }
}
