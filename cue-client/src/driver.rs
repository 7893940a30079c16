use crate::feeds::{ClueSource, HistoricSource};
use crate::store::{ClueStore, HistoricStore};
use crate::submit::GuessSubmitter;
use anyhow::{Result, bail};
use cue_core::{Board, Session, SessionPhase, sample_feedback};
use cue_types::{AgeRange, Gender, Language};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, warn};

/// All participant-facing strings for one UI language.
struct Texts {
    demographic_title: &'static str,
    gender: &'static str,
    age: &'static str,
    explanation_title: &'static str,
    explanation_body: &'static str,
    start_prompt: &'static str,
    help: &'static str,
    current_clue: &'static str,
    category: &'static str,
    enter_coordinate: &'static str,
    submitting: &'static str,
    success: &'static str,
    failure: &'static str,
    load_failed: &'static str,
    feedback_heading: &'static str,
    no_feedback: &'static str,
    next_prompt: &'static str,
    game_over: &'static str,
}

const SPANISH_TEXTS: Texts = Texts {
    demographic_title: "Información demográfica",
    gender: "Género",
    age: "Rango de edad",
    explanation_title: "Explicación del juego",
    explanation_body: "¡Bienvenido a Hues & Cues! Vas a jugar varias rondas de este juego de percepción de color.\n\
        \n\
        Objetivo: selecciona en el tablero el color que más asocies con la palabra que se te muestra.\n\
        \n\
        Cómo jugar:\n\
        1. Observa la palabra que aparece en cada ronda.\n\
        2. Escribe la casilla del tablero que mejor represente esa palabra (ej: H15).\n\
        3. Repite el proceso para cada palabra.\n\
        \n\
        No hay respuestas correctas o incorrectas: confía en tu intuición y diviértete.",
    start_prompt: "Pulsa Intro para empezar",
    help: "Escribe la casilla del tablero (A1 - P30)",
    current_clue: "Palabra actual",
    category: "Categoría",
    enter_coordinate: "Introduce la coordenada (ej: H15):",
    submitting: "Enviando...",
    success: "¡Respuesta registrada!",
    failure: "No se pudo registrar la respuesta. Inténtalo de nuevo.",
    load_failed: "No se pudieron cargar las palabras.",
    feedback_heading: "Otros jugadores eligieron:",
    no_feedback: "Todavía no hay respuestas de otros jugadores para esta palabra.",
    next_prompt: "Pulsa Intro para la siguiente palabra",
    game_over: "¡Fin del juego! Gracias por participar.",
};

const ENGLISH_TEXTS: Texts = Texts {
    demographic_title: "Demographic information",
    gender: "Gender",
    age: "Age range",
    explanation_title: "Game explanation",
    explanation_body: "Welcome to Hues & Cues! You will play several rounds of this color perception game.\n\
        \n\
        Objective: pick the board color you most associate with the word shown.\n\
        \n\
        How to play:\n\
        1. Look at the word displayed each round.\n\
        2. Type the board cell that best represents that word (e.g. H15).\n\
        3. Repeat the process for each word.\n\
        \n\
        There are no right or wrong answers: trust your perception and have fun.",
    start_prompt: "Press Enter to start",
    help: "Type the board cell (A1 - P30)",
    current_clue: "Current clue",
    category: "Category",
    enter_coordinate: "Enter coordinate (e.g. H15):",
    submitting: "Submitting...",
    success: "Guess registered successfully!",
    failure: "Failed to register guess. Please try again.",
    load_failed: "Failed to load clue words.",
    feedback_heading: "Other players picked:",
    no_feedback: "No other answers for this word yet.",
    next_prompt: "Press Enter for the next word",
    game_over: "Game over! Thanks for playing.",
};

fn texts(language: Language) -> &'static Texts {
    match language {
        Language::Spanish => &SPANISH_TEXTS,
        Language::English => &ENGLISH_TEXTS,
    }
}

/// Terminal shell around the session state machine. Walks the participant
/// through the same stages the browser UI presented as modals, then runs
/// the trial loop until the session completes or stdin closes.
pub struct Driver<S: ClueSource, H: HistoricSource> {
    clue_store: Arc<ClueStore<S>>,
    historic_store: Arc<HistoricStore<H>>,
    board: Board,
    submitter: GuessSubmitter,
    lines: Lines<BufReader<Stdin>>,
}

impl<S: ClueSource, H: HistoricSource> Driver<S, H> {
    pub fn new(
        clue_store: Arc<ClueStore<S>>,
        historic_store: Arc<HistoricStore<H>>,
        board: Board,
        submitter: GuessSubmitter,
    ) -> Self {
        Self {
            clue_store,
            historic_store,
            board,
            submitter,
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Run one full session. Returns Ok when the session completes or the
    /// participant walks away (stdin closes); abandonment needs no cleanup.
    pub async fn run(mut self) -> Result<()> {
        let mut session = Session::new();

        let Some(language) = self.prompt_language().await? else {
            return Ok(());
        };
        session.select_language(language)?;
        let texts = texts(language);

        if !self.prompt_demographics(&mut session, texts).await? {
            return Ok(());
        }
        session.confirm_demographics()?;

        println!("\n{}\n", texts.explanation_title);
        println!("{}\n", texts.explanation_body);
        if self.prompt(texts.start_prompt).await?.is_none() {
            return Ok(());
        }

        let clues = match self.clue_store.get(language).await {
            Ok(clues) => clues.as_ref().clone(),
            Err(feed_error) => {
                error!("failed to load clue words: {feed_error}");
                println!("{}", texts.load_failed);
                Vec::new()
            }
        };
        session.begin_trials(clues)?;

        println!("\n{}", texts.help);
        while !session.is_complete() {
            if !self.run_stage(&mut session, texts).await? {
                return Ok(());
            }
        }

        println!("\n{}", texts.game_over);
        Ok(())
    }

    /// One trial or feedback interaction. Returns false on end of input.
    async fn run_stage(&mut self, session: &mut Session, texts: &Texts) -> Result<bool> {
        match session.phase() {
            SessionPhase::Trial { index } => {
                let (word, category) = match session.current_clue() {
                    Some(clue) => (clue.word.clone(), clue.category.clone()),
                    None => bail!("no clue at trial index {index}"),
                };
                println!("\n{}: {}", texts.current_clue, word);
                if !category.is_empty() {
                    println!("{}: {}", texts.category, category);
                }

                let Some(input) = self.prompt(texts.enter_coordinate).await? else {
                    return Ok(false);
                };
                session.set_input(&input);

                let record = match session.begin_submission() {
                    Ok(record) => record,
                    Err(_) => {
                        if let Some(message) = session.input_error() {
                            println!("{message}");
                        }
                        return Ok(true);
                    }
                };

                println!("{}", texts.submitting);
                match self.submitter.submit(&record).await {
                    Ok(()) => {
                        let historic = self.historic_store.get().await;
                        let feedback =
                            sample_feedback(&historic, &record.clue_id, &record.coordinate);
                        session.submission_succeeded(record, feedback)?;
                        println!("{}", texts.success);
                    }
                    Err(submit_error) => {
                        warn!("guess submission failed: {submit_error}");
                        session.submission_failed(texts.failure)?;
                        println!("{}", texts.failure);
                    }
                }
                Ok(true)
            }
            SessionPhase::Feedback { .. } => {
                self.show_feedback(session, texts);
                if self.prompt(texts.next_prompt).await?.is_none() {
                    return Ok(false);
                }
                session.advance()?;
                Ok(true)
            }
            phase => bail!("unexpected session phase {phase:?} in trial loop"),
        }
    }

    fn show_feedback(&self, session: &Session, texts: &Texts) {
        if session.feedback().is_empty() {
            println!("{}", texts.no_feedback);
            return;
        }
        println!("{}", texts.feedback_heading);
        for coordinate in session.feedback() {
            match self.board.lookup(coordinate) {
                Some(cell) => {
                    println!("  {} (rgb {}, {}, {})", coordinate, cell.r, cell.g, cell.b)
                }
                None => println!("  {coordinate}"),
            }
        }
    }

    async fn prompt_language(&mut self) -> Result<Option<Language>> {
        println!("Elige tu idioma / Choose your language");
        for (number, language) in Language::ALL.into_iter().enumerate() {
            println!("  {}) {}", number + 1, language.label());
        }
        loop {
            let Some(line) = self.prompt(">").await? else {
                return Ok(None);
            };
            let choice = line.trim();
            if let Some(language) = Language::from_code(choice) {
                return Ok(Some(language));
            }
            if let Ok(number) = choice.parse::<usize>() {
                if let Some(language) = Language::ALL.get(number.wrapping_sub(1)) {
                    return Ok(Some(*language));
                }
            }
        }
    }

    /// Demographic stage. Both selections are required before the session
    /// may continue; the prompts simply repeat until each is made.
    async fn prompt_demographics(
        &mut self,
        session: &mut Session,
        texts: &Texts,
    ) -> Result<bool> {
        let language = session.language().unwrap_or(Language::Spanish);
        println!("\n{}", texts.demographic_title);

        while !session.demographics_complete() {
            if session.gender().is_none() {
                let labels: Vec<&str> =
                    Gender::ALL.iter().map(|gender| gender.label(language)).collect();
                let Some(choice) = self.prompt_choice(texts.gender, &labels).await? else {
                    return Ok(false);
                };
                session.select_gender(Gender::ALL[choice])?;
            }
            if session.age_range().is_none() {
                let labels: Vec<&str> =
                    AgeRange::ALL.iter().map(|range| range.as_str()).collect();
                let Some(choice) = self.prompt_choice(texts.age, &labels).await? else {
                    return Ok(false);
                };
                session.select_age_range(AgeRange::ALL[choice])?;
            }
        }
        Ok(true)
    }

    /// Numbered menu; repeats until a listed option is picked. Returns the
    /// zero-based index, or None on end of input.
    async fn prompt_choice(&mut self, title: &str, labels: &[&str]) -> Result<Option<usize>> {
        println!("{title}:");
        for (number, label) in labels.iter().enumerate() {
            println!("  {}) {label}", number + 1);
        }
        loop {
            let Some(line) = self.prompt(">").await? else {
                return Ok(None);
            };
            if let Ok(number) = line.trim().parse::<usize>() {
                if (1..=labels.len()).contains(&number) {
                    return Ok(Some(number - 1));
                }
            }
        }
    }

    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        print!("{text} ");
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }
}
