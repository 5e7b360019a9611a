//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Themed hint text for half-formed puzzle commands.
//!
//! When a player lands a known verb without a matching noun (or the other
//! way around) the aspect engine answers with an in-world nudge instead of
//! a flat failure. Hints are keyed by world and level so every floor of a
//! world speaks with one voice.

use rand::seq::IndexedRandom;

/// A pool of atmospheric hints for one narrative register.
///
/// `verb_hints` answer a recognized verb that lacked a target; `noun_hints`
/// answer a recognized noun that lacked an action.
pub struct HintTheme {
    pub verb_hints: [&'static str; 5],
    pub noun_hints: [&'static str; 5],
}

impl HintTheme {
    /// Pick a hint for a verb that landed without a matching target.
    pub fn verb_hint(&self) -> &'static str {
        self.verb_hints
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(self.verb_hints[0])
    }

    /// Pick a hint for a noun that landed without a matching action.
    pub fn noun_hint(&self) -> &'static str {
        self.noun_hints
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(self.noun_hints[0])
    }
}

/// Select the hint theme for a world level.
///
/// Unknown worlds and unthemed levels fall back to [`DEFAULT`].
pub fn theme_for(world_id: &str, level: Option<u32>) -> &'static HintTheme {
    match (world_id, level) {
        ("elemental_conflux", Some(1)) => &AIRBENDING,
        ("elemental_conflux", Some(3)) => &FLAME,
        ("elemental_conflux", Some(4)) => &WATER,
        ("elemental_conflux", Some(5)) => &SPIRIT,
        ("harmonic_nexus", Some(1)) => &TRENCH,
        ("harmonic_nexus", Some(2)) => &BIT,
        ("harmonic_nexus", Some(3)) => &CLOCKWORK,
        ("whimsical_realm", Some(1)) => &HATTER,
        ("whimsical_realm", Some(2)) => &ROSS,
        _ => &DEFAULT,
    }
}

/// Neutral hints for levels without a register of their own.
pub static DEFAULT: HintTheme = HintTheme {
    verb_hints: [
        "Your action holds power... but its target eludes you.",
        "The way you move shows promise... but towards what?",
        "There's wisdom in that action... but it seeks something more.",
        "Your approach resonates... but lacks proper focus.",
        "That method pulses with potential... but needs direction.",
    ],
    noun_hints: [
        "Something stirs in response... but requires the right approach.",
        "You sense importance here... yet the means escape you.",
        "This draws your attention... but demands different action.",
        "You're drawn to this... though your approach isn't quite right.",
        "There's meaning to be found here... but not like that.",
    ],
};

static AIRBENDING: HintTheme = HintTheme {
    verb_hints: [
        "The winds stir at your command... but seek a proper focus.",
        "Air responds to your motion... but needs direction.",
        "Your technique disturbs the breeze... though it wants a target.",
        "The currents acknowledge your gesture... but require purpose.",
        "You shape the air with skill... yet it yearns for more.",
    ],
    noun_hints: [
        "The air swirls around this... awaiting the proper technique.",
        "Breezes gather here... but need guidance.",
        "The winds recognize this... though your approach is wrong.",
        "Air currents dance about this focus... but how to direct them?",
        "This draws the attention of the breeze... but requires mastery.",
    ],
};

static FLAME: HintTheme = HintTheme {
    verb_hints: [
        "The flames flicker at your command... but lack focus.",
        "Fire responds to your gesture... yet seeks its target.",
        "Embers dance at your action... though need direction.",
        "Your technique carries heat... but requires purpose.",
        "The fire acknowledges your way... awaiting proper focus.",
    ],
    noun_hints: [
        "Heat gathers around this... but needs proper guidance.",
        "The flames dance about this... seeking true command.",
        "Fire stirs in recognition... though your approach falters.",
        "This resonates with burning potential... but requires mastery.",
        "The embers acknowledge this... yet await proper action.",
    ],
};

static WATER: HintTheme = HintTheme {
    verb_hints: [
        "The waters stir at your command... but seek direction.",
        "Waves respond to your motion... yet need focus.",
        "Your technique ripples outward... though incompletely.",
        "The currents acknowledge your gesture... but want purpose.",
        "You shape the waters with promise... awaiting true focus.",
    ],
    noun_hints: [
        "The waters gather here... but need proper guidance.",
        "Waves circle around this... seeking true command.",
        "The currents recognize this... though your approach wavers.",
        "This draws the tide's attention... but requires mastery.",
        "Water dances about this focus... yet awaits proper action.",
    ],
};

static SPIRIT: HintTheme = HintTheme {
    verb_hints: [
        "Ethereal energies acknowledge your action... but seek focus.",
        "The spirits stir at your command... yet need direction.",
        "Your technique touches the veil... though incompletely.",
        "Mystic forces respond to your gesture... but want purpose.",
        "You shape ethereal powers with promise... awaiting true focus.",
    ],
    noun_hints: [
        "Spiritual energy gathers here... but needs proper guidance.",
        "The veil thins around this... seeking true command.",
        "Mystic forces recognize this... though your approach wavers.",
        "This draws ethereal attention... but requires mastery.",
        "Spirit energies circle this focus... yet await proper action.",
    ],
};

static TRENCH: HintTheme = HintTheme {
    verb_hints: [
        "The underground stirs at your signal... but seeks its echo.",
        "Your technique carries the rhythm... though needs its voice.",
        "The shadows dance to your movement... seeking resonance.",
        "Yellow tape marks your path... but where does it lead?",
        "The city hears your call... awaiting proper harmony.",
    ],
    noun_hints: [
        "The underground recognizes this... but needs its signal.",
        "Echoes gather here... seeking proper amplification.",
        "The city's pulse aligns with this... though needs direction.",
        "Shadows mark this significance... but require proper movement.",
        "The rhythm acknowledges this... awaiting your signal.",
    ],
};

static BIT: HintTheme = HintTheme {
    verb_hints: [
        "Your input sequence shows promise... but needs proper data.",
        "That code execution flows... seeking its variable.",
        "Program function recognized... though lacks parameters.",
        "Runtime looks good... but requires target address.",
        "Pixel-perfect action... awaiting data structure.",
    ],
    noun_hints: [
        "Data structure detected... but needs proper algorithms.",
        "Valid variable found... seeking execution method.",
        "Memory address recognized... though requires proper input.",
        "Sprite data located... but needs animation sequence.",
        "Bitmap identified... awaiting proper rendering.",
    ],
};

static CLOCKWORK: HintTheme = HintTheme {
    verb_hints: [
        "Gears whir at your command... but seek their mechanism.",
        "Steam pressure builds promisingly... though needs its valves.",
        "The brass responds to your touch... but requires calibration.",
        "Mechanical precision noted... seeking proper apparatus.",
        "Your technique has proper torque... awaiting its machinery.",
    ],
    noun_hints: [
        "The mechanisms acknowledge this... but need proper operation.",
        "Brass and copper resonate here... seeking the right adjustment.",
        "Steam gathers about this focus... though requires proper pressure.",
        "Gears align with this purpose... but need precise calibration.",
        "The machinery recognizes this... awaiting proper technique.",
    ],
};

static HATTER: HintTheme = HintTheme {
    verb_hints: [
        "A perfectly mad approach... but to what, I wonder?",
        "Time approves of that action... though needs its tea party.",
        "Quite the wonderland gesture... seeking its madness.",
        "How curiouser and curiouser... but what's your target?",
        "Mad as a hatter, that move... though needs direction.",
    ],
    noun_hints: [
        "Well that's properly mad... but how will you use it?",
        "Worthy of an unbirthday... if you knew what to do.",
        "The madness recognizes this... awaiting proper teatime.",
        "Time himself would approve... if your technique matched.",
        "Something wonderlandish here... but needs madder methods.",
    ],
};

static ROSS: HintTheme = HintTheme {
    verb_hints: [
        "Your artistic technique has potential... but needs a happier subject.",
        "That's a happy little action... seeking its canvas.",
        "Your creative gesture flows... but hasn't found its joy.",
        "The brush moves with promise... though needs its muse.",
        "You paint with spirit... but what will you create?",
    ],
    noun_hints: [
        "A delightful subject... awaiting your artistic touch.",
        "What a happy little thing... but how will you capture it?",
        "This could be our little secret... if you knew how to paint it.",
        "Nature's beauty calls here... but needs the right strokes.",
        "Such wonderful inspiration... though your technique needs joy.",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_level_keeps_one_voice() {
        let air = theme_for("elemental_conflux", Some(1));
        assert!(air.verb_hints[0].contains("winds"));
        let steam = theme_for("harmonic_nexus", Some(3));
        assert!(steam.verb_hints[0].contains("Gears"));
    }

    #[test]
    fn test_unthemed_levels_fall_back() {
        let earth = theme_for("elemental_conflux", Some(2));
        assert_eq!(earth.verb_hints[0], DEFAULT.verb_hints[0]);
        let unknown = theme_for("nowhere", None);
        assert_eq!(unknown.noun_hints[0], DEFAULT.noun_hints[0]);
    }
}
