//! Static chord tables, one per family

use super::{ChordFamily, Key};

/// Chords of `family` for `key`, in table order.
pub fn chords_for(family: ChordFamily, key: Key) -> &'static [&'static str] {
    match family {
        ChordFamily::Power => power_chords(key),
        ChordFamily::SeventhMajor => seventh_chords_major(key),
        ChordFamily::Extended => extended_chords(key),
        ChordFamily::DiminishedAugmented => dim_aug_chords(key),
    }
}

fn power_chords(key: Key) -> &'static [&'static str] {
    match key {
        Key::C => &["C5", "D5", "E5", "F5", "G5", "A5", "B5"],
        Key::G => &["G5", "A5", "B5", "C5", "D5", "E5", "F#5"],
        Key::D => &["D5", "E5", "F#5", "G5", "A5", "B5", "C#5"],
        Key::A => &["A5", "B5", "C#5", "D5", "E5", "F#5", "G#5"],
        Key::E => &["E5", "F#5", "G#5", "A5", "B5", "C#5", "D#5"],
        Key::F => &["F5", "G5", "A5", "Bb5", "C5", "D5", "E5"],
        Key::B => &["B5", "C#5", "D#5", "E5", "F#5", "G#5", "A#5"],
    }
}

fn seventh_chords_major(key: Key) -> &'static [&'static str] {
    match key {
        Key::C => &["Cmaj7", "Dm7", "Em7", "Fmaj7", "G7", "Am7", "Bdim7"],
        Key::G => &["Gmaj7", "Am7", "Bm7", "Cmaj7", "D7", "Em7", "F#dim7"],
        Key::D => &["Dmaj7", "Em7", "F#m7", "Gmaj7", "A7", "Bm7", "C#dim7"],
        Key::A => &["Amaj7", "Bm7", "C#m7", "Dmaj7", "E7", "F#m7", "G#dim7"],
        Key::E => &["Emaj7", "F#m7", "G#m7", "Amaj7", "B7", "C#m7", "D#dim7"],
        Key::F => &["Fmaj7", "Gm7", "Am7", "Bbmaj7", "C7", "Dm7", "Edim7"],
        Key::B => &["Bmaj7", "C#m7", "D#m7", "Emaj7", "F#7", "G#m7", "A#dim7"],
    }
}

fn extended_chords(key: Key) -> &'static [&'static str] {
    match key {
        Key::C => &["C9", "C11", "C13", "Cadd9"],
        Key::G => &["G9", "G11", "G13", "Gadd9"],
        Key::D => &["D9", "D11", "D13", "Dadd9"],
        Key::A => &["A9", "A11", "A13", "Aadd9"],
        Key::E => &["E9", "E11", "E13", "Eadd9"],
        Key::F => &["F9", "F11", "F13", "Fadd9"],
        Key::B => &["B9", "B11", "B13", "Badd9"],
    }
}

fn dim_aug_chords(key: Key) -> &'static [&'static str] {
    match key {
        Key::C => &["Cdim", "Caug", "Cdim7"],
        Key::G => &["Gdim", "Gaug", "Gdim7"],
        Key::D => &["Ddim", "Daug", "Ddim7"],
        Key::A => &["Adim", "Aaug", "Adim7"],
        Key::E => &["Edim", "Eaug", "Edim7"],
        Key::F => &["Fdim", "Faug", "Fdim7"],
        Key::B => &["Bdim", "Baug", "Bdim7"],
    }
}
