//! Terminal sight-reading practice game.
//!
//! A sixty-second session over C4-C5. The engine serves random targets;
//! play them on the mapped computer keys (a-k row, sharps on w/e/t/y/u).
//! Each correct hit scores 100 points and brings up the next target.
//! Q or ESC stops the session early; either way the final statistics and
//! points-over-time series are printed at the end.

use std::io::{Write, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{ExecutableCommand, cursor};
use sightread::{PracticeSession, SessionConfig, SessionStatus, decode, note_name};

const KEY_NOTES: [(char, u8); 13] = [
    ('a', 60),
    ('w', 61),
    ('s', 62),
    ('e', 63),
    ('d', 64),
    ('f', 65),
    ('t', 66),
    ('g', 67),
    ('y', 68),
    ('h', 69),
    ('u', 70),
    ('j', 71),
    ('k', 72),
];

fn note_for_key(key: char) -> Option<u8> {
    KEY_NOTES
        .iter()
        .find(|(mapped, _)| *mapped == key)
        .map(|(_, note)| *note)
}

fn draw(session: &PracticeSession, flash: &str) -> Result<()> {
    let mut out = stdout();
    out.execute(Clear(ClearType::All))?;
    out.execute(cursor::MoveTo(0, 0))?;

    let target = session
        .current_target()
        .map(|t| format!("{} ({})", note_name(t.midi_number), t.display_key))
        .unwrap_or_else(|| "-".to_string());
    write!(
        out,
        "time {:>2}s | score {:>4} | play: {target} {flash}",
        session.remaining_seconds(),
        session.score(),
    )?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    stdout().execute(cursor::Hide)?;

    let mut session = PracticeSession::new();
    let started = Instant::now();
    session.start(SessionConfig::default(), 0.0)?;

    let mut last_tick = Instant::now();
    let mut flash = String::new();
    draw(&session, &flash)?;

    while session.status() == SessionStatus::Running {
        if last_tick.elapsed() >= Duration::from_secs(1) {
            last_tick += Duration::from_secs(1);
            session.tick();
            draw(&session, &flash)?;
            continue;
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    session.stop()?;
                }
                KeyCode::Char(c) => {
                    if let Some(note) = note_for_key(c) {
                        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
                        // The demo speaks raw MIDI like a real device would
                        if let Some(press) = decode(&[0x90, note, 100], now_ms) {
                            if let Some(outcome) =
                                session.on_note_on(press.note, press.timestamp_ms)
                            {
                                flash = if outcome.correct {
                                    format!("hit! ({:.0} ms)", outcome.response_time_ms)
                                } else {
                                    format!("{} - try again", note_name(note))
                                };
                            }
                        }
                        draw(&session, &flash)?;
                    }
                }
                _ => {}
            }
        }
    }

    stdout().execute(cursor::Show)?;
    terminal::disable_raw_mode()?;
    println!();

    if let Some(summary) = session.summary() {
        println!("attempts:  {}", summary.total_responses);
        println!("correct:   {}", summary.correct_count);
        println!("accuracy:  {}%", summary.accuracy_percent);
        println!("avg time:  {} ms", summary.avg_response_time_ms);
        println!("points:    {:?}", summary.cumulative_points);
        println!("score:     {}", session.score());
    }
    Ok(())
}
