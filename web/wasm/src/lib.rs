use flagquiz::{CountryPool, GameState, GuessOutcome, Phase, Quiz, QuizOptions, Round};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmQuiz {
    quiz: Quiz,
}

#[wasm_bindgen]
impl WasmQuiz {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, round_limit: u32) -> Self {
        let options = QuizOptions::default().with_round_limit(round_limit);
        Self {
            quiz: Quiz::new(options, seed as u64),
        }
    }

    pub fn start(&mut self) -> Result<JsValue, JsValue> {
        let round = self
            .quiz
            .start_game(CountryPool::flags())
            .map_err(js_err)?;
        to_js_value(&JsRound::from(&round))
    }

    pub fn start_with(&mut self, countries: Vec<String>) -> Result<JsValue, JsValue> {
        let round = self
            .quiz
            .start_game(CountryPool::from(countries))
            .map_err(js_err)?;
        to_js_value(&JsRound::from(&round))
    }

    pub fn guess(&mut self, index: u32) -> Result<JsValue, JsValue> {
        let outcome = self
            .quiz
            .submit_guess(index as usize)
            .map_err(js_err)?;
        to_js_value(&JsOutcome::from(outcome))
    }

    pub fn advance(&mut self) -> Result<JsValue, JsValue> {
        let round = self.quiz.advance_round().map_err(js_err)?;
        to_js_value(&JsRound::from(&round))
    }

    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        let state = self.quiz.reset_game();
        to_js_value(&JsScore::from(state))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            phase: phase_to_str(self.quiz.phase()),
            round: self.quiz.round().map(JsRound::from),
            score: JsScore::from(self.quiz.game_state()),
            round_limit: self.quiz.options.round_limit,
            countries_remaining: self.quiz.remaining_countries().len() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    round: Option<JsRound>,
    score: JsScore,
    round_limit: Option<u32>,
    countries_remaining: u32,
}

#[derive(Serialize)]
struct JsRound {
    options: Vec<String>,
    correct_index: u32,
    correct_answer: String,
}

impl From<&Round> for JsRound {
    fn from(round: &Round) -> Self {
        Self {
            options: round.options().to_vec(),
            correct_index: round.correct_index() as u32,
            correct_answer: round.correct_answer().to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsScore {
    rounds_played: u32,
    correct_guesses: u32,
    is_game_over: bool,
    percent_correct: u8,
}

impl From<GameState> for JsScore {
    fn from(state: GameState) -> Self {
        Self {
            rounds_played: state.rounds_played,
            correct_guesses: state.correct_guesses,
            is_game_over: state.is_game_over,
            percent_correct: state.percent_correct(),
        }
    }
}

#[derive(Serialize)]
struct JsOutcome {
    correct: bool,
    chosen_index: u32,
    chosen: String,
    correct_answer: String,
    score: JsScore,
}

impl From<GuessOutcome> for JsOutcome {
    fn from(outcome: GuessOutcome) -> Self {
        Self {
            correct: outcome.correct,
            chosen_index: outcome.chosen_index as u32,
            chosen: outcome.chosen,
            correct_answer: outcome.correct_answer,
            score: JsScore::from(outcome.state),
        }
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "NotStarted",
        Phase::RoundActive => "RoundActive",
        Phase::RoundAnswered => "RoundAnswered",
        Phase::GameOver => "GameOver",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
