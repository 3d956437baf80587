//! Quiz integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use flagquiz::{
    AdvanceError, CountryPool, GameState, GuessError, OPTIONS_PER_ROUND, Phase, PoolError,
    PoolPolicy, Quiz, QuizEvent, QuizOptions, Round, RoundError,
};

fn round(options: [&str; 3], correct_index: usize) -> Round {
    Round::new(options.map(String::from), correct_index).unwrap()
}

fn wrong_index(round: &Round) -> usize {
    (round.correct_index() + 1) % OPTIONS_PER_ROUND
}

fn abcd() -> CountryPool {
    CountryPool::new(["A", "B", "C", "D"])
}

#[test]
fn start_deals_three_distinct_countries_from_pool() {
    for seed in 0..50 {
        let pool = CountryPool::flags();
        let mut quiz = Quiz::new(QuizOptions::default(), seed);
        let round = quiz.start_game(pool.clone()).unwrap();

        let options = round.options();
        assert!(options.iter().all(|country| pool.contains(country)));
        assert_ne!(options[0], options[1]);
        assert_ne!(options[0], options[2]);
        assert_ne!(options[1], options[2]);
        assert!(round.correct_index() < OPTIONS_PER_ROUND);

        assert_eq!(quiz.phase(), Phase::RoundActive);
        assert_eq!(quiz.game_state(), GameState::default());
        assert_eq!(quiz.round(), Some(&round));
    }
}

#[test]
fn start_with_exactly_three_countries() {
    let mut quiz = Quiz::new(QuizOptions::default(), 3);
    let round = quiz.start_game(CountryPool::new(["A", "B", "C"])).unwrap();

    let mut options = round.options().clone();
    options.sort();
    assert_eq!(options, ["A", "B", "C"]);
}

#[test]
fn start_rejects_invalid_pools() {
    let mut quiz = Quiz::new(QuizOptions::default(), 1);

    assert_eq!(
        quiz.start_game(CountryPool::new(["A", "B"])).unwrap_err(),
        PoolError::TooFewCountries { found: 2 }
    );
    assert_eq!(
        quiz.start_game(CountryPool::new(["A", "B", "A"])).unwrap_err(),
        PoolError::DuplicateCountry
    );
    assert_eq!(quiz.phase(), Phase::NotStarted);
    assert!(quiz.round().is_none());
}

#[test]
fn same_seed_deals_same_rounds() {
    let mut first = Quiz::new(QuizOptions::default(), 99);
    let mut second = Quiz::new(QuizOptions::default(), 99);

    assert_eq!(
        first.start_game(CountryPool::flags()).unwrap(),
        second.start_game(CountryPool::flags()).unwrap()
    );
    first.submit_guess(0).unwrap();
    second.submit_guess(0).unwrap();
    assert_eq!(first.advance_round().unwrap(), second.advance_round().unwrap());
}

#[test]
fn correct_and_wrong_guesses_update_score() {
    let mut quiz = Quiz::new(QuizOptions::default(), 5);
    let first = quiz.start_game(CountryPool::flags()).unwrap();

    let outcome = quiz.submit_guess(first.correct_index()).unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.correct_answer, first.correct_answer());
    assert_eq!(outcome.state.rounds_played, 1);
    assert_eq!(outcome.state.correct_guesses, 1);
    assert_eq!(quiz.phase(), Phase::RoundAnswered);

    let second = quiz.advance_round().unwrap();
    let wrong = wrong_index(&second);
    let outcome = quiz.submit_guess(wrong).unwrap();
    assert!(!outcome.correct);
    assert_eq!(outcome.chosen, second.options()[wrong]);
    assert_eq!(outcome.correct_answer, second.correct_answer());
    assert_eq!(outcome.state.rounds_played, 2);
    assert_eq!(outcome.state.correct_guesses, 1);
}

#[test]
fn scripted_scenario() {
    let mut quiz = Quiz::new(QuizOptions::default(), 11);
    quiz.start_game(abcd()).unwrap();

    quiz.set_round(round(["B", "D", "A"], 1)).unwrap();
    let outcome = quiz.submit_guess(1).unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.correct_answer, "D");
    assert_eq!(
        outcome.state,
        GameState {
            rounds_played: 1,
            correct_guesses: 1,
            is_game_over: false,
        }
    );

    let next = quiz.advance_round().unwrap();
    assert!(!next.options().contains(&String::from("D")));

    quiz.set_round(round(["C", "A", "B"], 2)).unwrap();
    let outcome = quiz.submit_guess(0).unwrap();
    assert!(!outcome.correct);
    assert_eq!(outcome.chosen, "C");
    assert_eq!(outcome.correct_answer, "B");
    assert_eq!(outcome.state.rounds_played, 2);
    assert_eq!(outcome.state.correct_guesses, 1);
}

#[test]
fn invalid_index_leaves_state_unchanged() {
    let mut quiz = Quiz::new(QuizOptions::default(), 2);
    let round = quiz.start_game(CountryPool::flags()).unwrap();

    assert_eq!(quiz.submit_guess(5).unwrap_err(), GuessError::InvalidIndex(5));
    assert_eq!(quiz.submit_guess(3).unwrap_err(), GuessError::InvalidIndex(3));
    assert_eq!(quiz.game_state(), GameState::default());
    assert_eq!(quiz.phase(), Phase::RoundActive);
    assert_eq!(quiz.round(), Some(&round));
}

#[test]
fn guess_rejects_wrong_phase() {
    let mut quiz = Quiz::new(QuizOptions::default(), 2);
    assert_eq!(quiz.submit_guess(0).unwrap_err(), GuessError::InvalidState);

    quiz.start_game(CountryPool::flags()).unwrap();
    quiz.submit_guess(0).unwrap();
    assert_eq!(quiz.submit_guess(0).unwrap_err(), GuessError::InvalidState);
    assert_eq!(quiz.game_state().rounds_played, 1);
}

#[test]
fn advance_rejects_wrong_phase() {
    let mut quiz = Quiz::new(QuizOptions::default(), 2);
    assert_eq!(quiz.advance_round().unwrap_err(), AdvanceError::InvalidState);

    quiz.start_game(CountryPool::flags()).unwrap();
    assert_eq!(quiz.advance_round().unwrap_err(), AdvanceError::InvalidState);
}

#[test]
fn game_ends_after_ten_rounds() {
    let mut quiz = Quiz::new(QuizOptions::default(), 8);
    let mut round = quiz.start_game(CountryPool::flags()).unwrap();

    for played in 1..=10 {
        let outcome = quiz.submit_guess(round.correct_index()).unwrap();
        assert_eq!(outcome.state.rounds_played, played);
        assert!(outcome.state.correct_guesses <= outcome.state.rounds_played);

        if played < 10 {
            assert!(!outcome.ends_game());
            round = quiz.advance_round().unwrap();
        } else {
            assert!(outcome.ends_game());
        }
    }

    assert!(quiz.is_game_over());
    assert_eq!(quiz.phase(), Phase::GameOver);
    assert_eq!(quiz.game_state().correct_guesses, 10);
    assert_eq!(quiz.advance_round().unwrap_err(), AdvanceError::GameOver);
    assert_eq!(quiz.submit_guess(0).unwrap_err(), GuessError::InvalidState);
}

#[test]
fn score_never_exceeds_rounds_played() {
    let options = QuizOptions::default().with_round_limit(40);
    let mut quiz = Quiz::new(options, 21);
    let mut round = quiz.start_game(CountryPool::flags()).unwrap();

    for turn in 0..40 {
        let pick = if turn % 3 == 0 {
            round.correct_index()
        } else {
            wrong_index(&round)
        };
        let outcome = quiz.submit_guess(pick).unwrap();
        assert!(outcome.state.correct_guesses <= outcome.state.rounds_played);
        if outcome.ends_game() {
            break;
        }
        round = quiz.advance_round().unwrap();
    }

    let state = quiz.game_state();
    assert_eq!(state.rounds_played, 40);
    assert_eq!(state.correct_guesses, 14);
    assert!(state.is_game_over);
}

#[test]
fn endless_games_never_end() {
    let mut quiz = Quiz::new(QuizOptions::endless(), 4);
    quiz.start_game(abcd()).unwrap();

    for _ in 0..100 {
        let outcome = quiz.submit_guess(0).unwrap();
        assert!(!outcome.ends_game());
        let round = quiz.advance_round().unwrap();
        assert!(round.options().iter().all(|c| abcd().contains(c)));
    }

    assert_eq!(quiz.remaining_countries().len(), 4);
    assert_eq!(quiz.game_state().rounds_played, 100);
}

#[test]
fn answered_country_leaves_working_pool() {
    let mut quiz = Quiz::new(QuizOptions::default(), 6);
    let pool = CountryPool::flags();
    let mut round = quiz.start_game(pool.clone()).unwrap();
    let mut removed = Vec::new();

    for _ in 0..9 {
        quiz.submit_guess(0).unwrap();
        removed.push(round.correct_answer().to_string());
        round = quiz.advance_round().unwrap();

        for country in &removed {
            assert!(!round.options().contains(country));
            assert!(!quiz.remaining_countries().contains(country));
        }
    }

    assert_eq!(quiz.remaining_countries().len(), pool.len() - 9);
}

#[test]
fn exhausted_working_pool_is_restored() {
    let mut quiz = Quiz::new(QuizOptions::default(), 9);
    quiz.start_game(abcd()).unwrap();

    quiz.submit_guess(0).unwrap();
    quiz.advance_round().unwrap();
    assert_eq!(quiz.remaining_countries().len(), 3);

    quiz.submit_guess(0).unwrap();
    quiz.advance_round().unwrap();
    assert_eq!(quiz.remaining_countries().len(), 4);
}

#[test]
fn retain_policy_keeps_full_pool() {
    let options = QuizOptions::default().with_pool_policy(PoolPolicy::Retain);
    let mut quiz = Quiz::new(options, 12);
    quiz.start_game(CountryPool::flags()).unwrap();

    for _ in 0..5 {
        quiz.submit_guess(1).unwrap();
        quiz.advance_round().unwrap();
    }

    assert_eq!(quiz.remaining_countries().len(), CountryPool::flags().len());
}

#[test]
fn reset_clears_score_from_any_phase() {
    let mut quiz = Quiz::new(QuizOptions::default().with_round_limit(2), 13);
    assert_eq!(quiz.reset_game(), GameState::default());
    assert_eq!(quiz.phase(), Phase::NotStarted);

    quiz.start_game(CountryPool::flags()).unwrap();
    quiz.submit_guess(0).unwrap();
    assert_eq!(quiz.reset_game(), GameState::default());
    assert_eq!(quiz.phase(), Phase::RoundActive);

    quiz.submit_guess(0).unwrap();
    quiz.advance_round().unwrap();
    quiz.submit_guess(0).unwrap();
    assert!(quiz.is_game_over());

    let state = quiz.reset_game();
    assert_eq!(state.rounds_played, 0);
    assert_eq!(state.correct_guesses, 0);
    assert!(!state.is_game_over);
    assert_eq!(quiz.phase(), Phase::RoundActive);
    assert_eq!(quiz.remaining_countries().len(), CountryPool::flags().len());
    assert!(quiz.submit_guess(0).is_ok());
}

#[test]
fn restart_discards_game_in_progress() {
    let mut quiz = Quiz::new(QuizOptions::default(), 14);
    quiz.start_game(CountryPool::flags()).unwrap();
    quiz.submit_guess(0).unwrap();

    let round = quiz.start_game(abcd()).unwrap();
    assert_eq!(quiz.game_state(), GameState::default());
    assert_eq!(quiz.pool(), &abcd());
    assert!(round.options().iter().all(|c| abcd().contains(c)));
}

#[test]
fn set_round_validates_input() {
    let mut quiz = Quiz::new(QuizOptions::default(), 15);
    assert_eq!(
        quiz.set_round(round(["A", "B", "C"], 0)).unwrap_err(),
        RoundError::InvalidState
    );

    quiz.start_game(abcd()).unwrap();
    assert_eq!(
        quiz.set_round(round(["A", "B", "E"], 0)).unwrap_err(),
        RoundError::UnknownCountry
    );
}

#[test]
fn listeners_observe_state_changes() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&events);

    let mut quiz = Quiz::new(QuizOptions::default().with_round_limit(1), 16);
    let id = quiz.subscribe(move |event| log.borrow_mut().push(event.clone()));
    assert_eq!(quiz.listener_count(), 1);

    let round = quiz.start_game(CountryPool::flags()).unwrap();
    let outcome = quiz.submit_guess(round.correct_index()).unwrap();

    {
        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            QuizEvent::RoundStarted {
                round: round.clone(),
                number: 1,
            }
        );
        assert_eq!(events[1], QuizEvent::GuessRecorded(outcome.clone()));
        assert_eq!(events[2], QuizEvent::GameOver(outcome.state));
    }

    assert!(quiz.unsubscribe(id));
    assert!(!quiz.unsubscribe(id));
    quiz.reset_game();
    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn reset_notifies_listeners() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&events);

    let mut quiz = Quiz::new(QuizOptions::default(), 17);
    quiz.start_game(CountryPool::flags()).unwrap();
    quiz.subscribe(move |event| log.borrow_mut().push(event.clone()));

    quiz.reset_game();

    let events = events.borrow();
    assert_eq!(events[0], QuizEvent::Reset(GameState::default()));
    assert!(matches!(
        events[1],
        QuizEvent::RoundStarted { number: 1, .. }
    ));
}
