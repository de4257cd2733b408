//! Terminal keyboard visualizer.
//!
//! The computer keyboard stands in for a MIDI device: each mapped key
//! synthesizes a raw three-byte note message, runs it through the real
//! decoder, and toggles that note in the active-note set. Press a mapped
//! key to light it, press it again to release. Q or ESC quits.

use std::io::{Write, stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{ExecutableCommand, cursor};
use sightread::{ActiveNotes, NoteEvent, NoteKind, decode};

/// Home-row mapping, C4 to C5 with sharps on the row above.
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

fn draw(held: &ActiveNotes, last: Option<&NoteEvent>) -> Result<()> {
    let mut out = stdout();
    out.execute(Clear(ClearType::All))?;
    out.execute(cursor::MoveTo(0, 0))?;

    let lit: String = KEY_NOTES
        .iter()
        .map(|(_, note)| if held.contains(*note) { '#' } else { '.' })
        .collect();
    write!(out, "C4 [{lit}] C5 | ")?;

    match last {
        Some(event) => {
            let kind = match event.kind {
                NoteKind::On => "on ",
                NoteKind::Off => "off",
            };
            write!(
                out,
                "last: {} ({}) vel {} {}",
                event.name(),
                event.note,
                event.velocity,
                kind
            )?;
        }
        None => write!(out, "play a key (a-k row) | q quits")?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    stdout().execute(cursor::Hide)?;

    let mut held = ActiveNotes::new();
    let mut last: Option<NoteEvent> = None;
    let mut clock_ms = 0.0;
    draw(&held, None)?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char(c) => {
                    if let Some(note) = note_for_key(c) {
                        clock_ms += 1.0;
                        // Toggle: a second press of a lit key releases it
                        let raw = if held.contains(note) {
                            [0x80, note, 0]
                        } else {
                            [0x90, note, 100]
                        };
                        if let Some(decoded) = decode(&raw, clock_ms) {
                            held.apply(&decoded);
                            last = Some(decoded);
                        }
                        draw(&held, last.as_ref())?;
                    }
                }
                _ => {}
            }
        }
    }

    stdout().execute(cursor::Show)?;
    terminal::disable_raw_mode()?;
    println!();
    Ok(())
}
