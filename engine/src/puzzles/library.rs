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

//! The built-in puzzle library.
//!
//! Pure content: every trial ships as a [`PuzzleBlueprint`] naming its
//! aspects, the room each aspect is bound to, the verb and noun
//! vocabularies the matcher accepts, and the narrative strings printed on
//! progress and completion. Worlds bind a subset of these by id through
//! `worlds.json`.

use super::aspect::{AspectDef, AspectPuzzle, PuzzleBlueprint};

/// Look up a blueprint by puzzle id.
pub fn blueprint(puzzle_id: &str) -> Option<&'static PuzzleBlueprint> {
    BLUEPRINTS
        .iter()
        .find(|blueprint| blueprint.id == puzzle_id)
        .copied()
}

/// Instantiate a fresh, unsolved puzzle by id.
pub fn instantiate(puzzle_id: &str) -> Option<AspectPuzzle> {
    blueprint(puzzle_id).map(AspectPuzzle::new)
}

/// Ids of every built-in puzzle, in library order.
pub fn all_ids() -> impl Iterator<Item = &'static str> {
    BLUEPRINTS.iter().map(|blueprint| blueprint.id)
}

static BLUEPRINTS: &[&PuzzleBlueprint] = &[
    &AIR_CURRENTS_PUZZLE,
    &EARTH_STABILITY_PUZZLE,
    &FIRE_MASTERY_PUZZLE,
    &WATER_MASTERY_PUZZLE,
    &SPIRIT_LEVEL_PUZZLE,
    &ALTERNATIVE_ROCK_PUZZLE,
    &CHIPTUNE_PUZZLE,
    &STEAMPUNK_MUSIC_PUZZLE,
    &NOSTALGIA_PUZZLE,
    &CREATIVE_CONVERGENCE_PUZZLE,
    &CHILDHOOD_PUZZLE,
];

static AIR_CURRENTS_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "air_currents_puzzle",
    name: "Trial of Wind Mastery",
    description: "A multi-part challenge requiring spiritual harmony, celestial navigation, and storm communion to master the winds.",
    success_template: "The air currents shift in response. The {aspect} grows stronger.",
    completion_message: "The combined powers of air currents, celestial navigation, and storm energy create a path forward!",
    aspects: &[
        AspectDef {
            name: "spiritual_harmony",
            room: "aangs_airbending_academy",
            verbs: &[
                "attune", "balance", "breathe", "center", "channel", "feel", "flow",
                "focus", "guide", "harmonize", "meditate", "observe", "sense",
                "stir", "study",
            ],
            nouns: &[
                "breath", "breaths", "breeze", "breezes", "chime", "chimes",
                "crystal", "crystals", "current", "currents", "path", "paths",
                "resonance", "resonances", "scroll", "scrolls", "spirit", "spirits",
                "wind", "winds",
            ],
        },
        AspectDef {
            name: "celestial_navigation",
            room: "marios_wing_cap_heights",
            verbs: &[
                "align", "ascend", "dance", "dive", "drift", "float", "fly",
                "follow", "glide", "hover", "leap", "navigate", "soar", "trace",
                "tune",
            ],
            nouns: &[
                "cap", "caps", "cloud", "clouds", "height", "heights", "light",
                "lights", "path", "paths", "platform", "platforms", "power",
                "powers", "skies", "sky", "star", "stars", "wing", "wings",
            ],
        },
        AspectDef {
            name: "storm_communion",
            room: "storm_crows_ascension",
            verbs: &[
                "calm", "channel", "control", "crackle", "direct", "echo", "flash",
                "focus", "guide", "harness", "hear", "rumble", "stir", "surge",
                "touch",
            ],
            nouns: &[
                "cloud", "clouds", "crow", "crows", "energies", "energy", "feather",
                "feathers", "lightning", "lightnings", "rod", "rods", "spire",
                "spires", "storm", "storms", "tempest", "tempests", "thunder",
                "thunders",
            ],
        },
    ],
};

static EARTH_STABILITY_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "earth_stability_puzzle",
    name: "Trial of Earth Force",
    description: "Master the elements of earth through seismic resonance, tactical earthbending, and forge mastery",
    success_template: "The earth rumbles in response. The {aspect} grows stronger.",
    completion_message: "The ground trembles with approval as the three earthen forces unite, carving a new path through the mountain!",
    aspects: &[
        AspectDef {
            name: "seismic_resonance",
            room: "tophs_crystal_caverns",
            verbs: &[
                "attune", "bend", "feel", "focus", "form", "glow", "hum", "listen",
                "mold", "pulse", "resonate", "sense", "shape", "shift", "vibrate",
            ],
            nouns: &[
                "cavern", "caverns", "crystal", "crystals", "earth", "earths",
                "energies", "energy", "force", "forces", "formation", "formations",
                "ground", "grounds", "resonance", "resonances", "stone", "stones",
                "vibration", "vibrations",
            ],
        },
        AspectDef {
            name: "tactical_earthbending",
            room: "rock_solid_chess_dojo",
            verbs: &[
                "advance", "analyze", "block", "calculate", "capture", "counter",
                "defend", "move", "observe", "plan", "position", "spar", "strike",
                "study", "train",
            ],
            nouns: &[
                "board", "boards", "form", "forms", "pattern", "patterns", "pawn",
                "pawns", "piece", "pieces", "rock", "rocks", "square", "squares",
                "stance", "stances", "stone", "stones", "strategies", "strategy",
            ],
        },
        AspectDef {
            name: "forge_mastery",
            room: "torbrans_forge_hall",
            verbs: &[
                "anneal", "cool", "craft", "create", "design", "engrave", "etch",
                "forge", "hammer", "heat", "mold", "quench", "shape", "strike",
                "temper",
            ],
            nouns: &[
                "anvil", "anvils", "blade", "blades", "flame", "flames", "forge",
                "forges", "hammer", "hammers", "metal", "metals", "ore", "ores",
                "rune", "runes", "sigil", "sigils", "weapon", "weapons",
            ],
        },
    ],
};

static FIRE_MASTERY_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "fire_mastery_puzzle",
    name: "Trial of Fire Force",
    description: "Master the elements of fire through pyromantic combat, dragon wisdom, and disciplined breath",
    success_template: "The flames respond to your command. The {aspect} burns stronger.",
    completion_message: "The fires roar in harmony as combat, wisdom, and discipline unite, opening a blazing path through the flames!",
    aspects: &[
        AspectDef {
            name: "pyromantic_combat",
            room: "chandras_flame_sanctuary",
            verbs: &[
                "attack", "blast", "channel", "control", "counter", "defend",
                "direct", "dodge", "focus", "harness", "ignite", "release", "shape",
                "strike", "surge",
            ],
            nouns: &[
                "arena", "arenas", "blast", "blasts", "blaze", "blazes", "energies",
                "energy", "fire", "fires", "flame", "flames", "inferno", "infernos",
                "power", "powers", "rune", "runes", "spark", "sparks",
            ],
        },
        AspectDef {
            name: "dragon_wisdom",
            room: "irohs_dragon_tea_garden",
            verbs: &[
                "breathe", "brew", "center", "contemplate", "drink", "harmonize",
                "learn", "meditate", "observe", "pour", "reflect", "sense", "serve",
                "steep", "understand",
            ],
            nouns: &[
                "breath", "breaths", "dragon", "dragons", "garden", "gardens",
                "leaf", "leaves", "scale", "scales", "spirit", "spirits", "statue",
                "statues", "tea", "teaching", "teachings", "teas", "wisdom",
                "wisdoms",
            ],
        },
        AspectDef {
            name: "disciplined_breath",
            room: "zukos_dragon_fire",
            verbs: &[
                "align", "balance", "channel", "control", "direct", "flow", "focus",
                "guide", "master", "perfect", "practice", "regulate", "shift",
                "study", "train",
            ],
            nouns: &[
                "blade", "blades", "breath", "breaths", "chi", "chis", "energies",
                "energy", "form", "forms", "ground", "grounds", "heat", "heats",
                "stance", "stances", "sword", "swords", "volcano", "volcanos",
            ],
        },
    ],
};

static WATER_MASTERY_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "water_mastery_puzzle",
    name: "Trial of Tidal Force",
    description: "Master the elements of water through healing arts, ocean wisdom, and playful mastery",
    success_template: "The waters respond to your command. The {aspect} flows stronger.",
    completion_message: "The waters surge with harmony as healing, wisdom, and play unite, opening a serene path through the waves!",
    aspects: &[
        AspectDef {
            name: "healing_arts",
            room: "kataras_waterbending_rapids",
            verbs: &[
                "balance", "bend", "channel", "cleanse", "direct", "flow", "focus",
                "guide", "harmonize", "heal", "mend", "purify", "restore", "shape",
                "soothe",
            ],
            nouns: &[
                "crystal", "crystals", "energies", "energy", "essence", "essences",
                "moon", "moons", "pool", "pools", "rapid", "rapids", "spirit",
                "spirits", "stream", "streams", "water", "waters", "wound", "wounds",
            ],
        },
        AspectDef {
            name: "ocean_wisdom",
            room: "moana_waves",
            verbs: &[
                "attune", "chart", "connect", "embrace", "feel", "guide", "know",
                "learn", "listen", "merge", "navigate", "read", "sail", "sense",
                "understand",
            ],
            nouns: &[
                "current", "currents", "depth", "depths", "heart", "hearts",
                "light", "lights", "path", "paths", "pendant", "pendants", "reef",
                "reefs", "star", "stars", "tide", "tides", "wave", "waves",
            ],
        },
        AspectDef {
            name: "playful_mastery",
            room: "squirtles_surfing_coast",
            verbs: &[
                "balance", "dance", "dive", "flip", "float", "glide", "jump",
                "leap", "play", "ride", "spin", "splash", "surf", "swim", "twist",
            ],
            nouns: &[
                "beach", "beaches", "board", "boards", "coast", "coasts", "foam",
                "foams", "ripple", "ripples", "shell", "shells", "splash",
                "splashes", "spray", "sprays", "surf", "surfs", "wave", "waves",
            ],
        },
    ],
};

static SPIRIT_LEVEL_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "spirit_level_puzzle",
    name: "Trial of Spirit Force",
    description: "Master the elements of spirit through ethereal resonance, astral ascension, and ancestral bonds",
    success_template: "The spirits respond to your command. The {aspect} grows stronger.",
    completion_message: "The spirits resonate in harmony as ethereal, astral, and ancestral forces unite, opening a mystical path through the veil!",
    aspects: &[
        AspectDef {
            name: "ethereal_resonance",
            room: "raavas_ethereal_sanctuary",
            verbs: &[
                "attune", "balance", "channel", "connect", "glow", "harmonize",
                "illuminate", "merge", "pulse", "radiate", "resonate", "shine",
                "transcend", "unite", "vibrate",
            ],
            nouns: &[
                "aura", "auras", "energies", "energy", "essence", "essences",
                "light", "lights", "portal", "portals", "pulse", "pulses", "ray",
                "rays", "sanctuaries", "sanctuary", "spirit", "spirits", "veil",
                "veils",
            ],
        },
        AspectDef {
            name: "astral_ascension",
            room: "celeste_mountains_astral_ascent",
            verbs: &[
                "ascend", "contemplate", "dream", "drift", "envision", "explore",
                "float", "imagine", "journey", "navigate", "perceive", "project",
                "soar", "transcend", "traverse",
            ],
            nouns: &[
                "bridge", "bridges", "dream", "dreams", "mind", "minds", "moon",
                "moons", "path", "paths", "realm", "realms", "sight", "sights",
                "soul", "souls", "star", "stars", "vision", "visions",
            ],
        },
        AspectDef {
            name: "ancestral_bonds",
            room: "mount_pyres_ancestral_summit",
            verbs: &[
                "bond", "call", "chant", "connect", "honor", "link", "pray",
                "preserve", "recall", "reflect", "remember", "revere", "speak",
                "unite", "whisper",
            ],
            nouns: &[
                "altar", "altars", "ancestor", "ancestors", "bond", "bonds",
                "memories", "memory", "mist", "mists", "peak", "peaks", "shrine",
                "shrines", "spirit", "spirits", "stories", "story", "voice",
                "voices",
            ],
        },
    ],
};

static ALTERNATIVE_ROCK_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "alternative_rock_puzzle",
    name: "Trial of Rock Harmony",
    description: "Master the elements of alternative rock through theatrical performance, emotional resonance, and energetic fusion",
    success_template: "The music responds to your command. The {aspect} grows stronger.",
    completion_message: "The music swells in harmony as theatrics, emotion, and energy unite, opening a rhythmic path through the sound!",
    aspects: &[
        AspectDef {
            name: "theatrical_performance",
            room: "panic_at_the_disco_boom_boom_ballroom",
            verbs: &[
                "bow", "captivate", "command", "dance", "dazzle", "enchant",
                "entrance", "flourish", "gesture", "perform", "pose", "sing",
                "spin", "strut", "twirl",
            ],
            nouns: &[
                "ballroom", "ballrooms", "curtain", "curtains", "dance", "dances",
                "glass", "glasses", "glitter", "glitters", "hat", "hats", "light",
                "lights", "song", "songs", "spotlight", "spotlights", "stage",
                "stages",
            ],
        },
        AspectDef {
            name: "emotional_resonance",
            room: "twenty_one_pilots_trench_terminal",
            verbs: &[
                "blend", "connect", "convey", "craft", "create", "embrace",
                "express", "feel", "paint", "reflect", "resonate", "reveal",
                "shape", "share", "understand",
            ],
            nouns: &[
                "emotion", "emotions", "feeling", "feelings", "paint", "paints",
                "pattern", "patterns", "shadow", "shadows", "symbol", "symbols",
                "tape", "tapes", "trench", "trenches", "tunnel", "tunnels", "wall",
                "walls",
            ],
        },
        AspectDef {
            name: "energetic_fusion",
            room: "ajr_bang_boulevard",
            verbs: &[
                "blast", "bounce", "celebrate", "cheer", "create", "dance", "jump",
                "mix", "move", "party", "perform", "play", "rejoice", "shout",
                "spin",
            ],
            nouns: &[
                "beat", "beats", "confetti", "confettis", "drum", "drums", "light",
                "lights", "neon", "neons", "note", "notes", "sign", "signs",
                "sound", "sounds", "street", "streets", "trumpet", "trumpets",
            ],
        },
        AspectDef {
            name: "visual_storytelling",
            room: "saint_motel_voyeur_vista",
            verbs: &[
                "capture", "craft", "create", "document", "film", "observe",
                "record", "see", "share", "shoot", "tell", "view", "watch", "weave",
                "witness",
            ],
            nouns: &[
                "camera", "cameras", "film", "films", "image", "images", "light",
                "lights", "moment", "moments", "reel", "reels", "scene", "scenes",
                "stories", "story", "tale", "tales", "vista", "vistas",
            ],
        },
    ],
};

static CHIPTUNE_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "chiptune_puzzle",
    name: "Trial of Digital Harmony",
    description: "Master the elements of chiptune through epic composition, retro fusion, and kawaii beats",
    success_template: "The pixels respond to your command. The {aspect} grows stronger.",
    completion_message: "The digital sounds harmonize as epic, retro, and kawaii unite, opening a pixelated path through the code!",
    aspects: &[
        AspectDef {
            name: "epic_composition",
            room: "darren_korb_supergiant_studio",
            verbs: &[
                "arrange", "balance", "blend", "compose", "conduct", "create",
                "harmonize", "layer", "mix", "orchestrate", "perform", "play",
                "record", "strum", "write",
            ],
            nouns: &[
                "amplifier", "amplifiers", "chord", "chords", "guitar", "guitars",
                "melodies", "melody", "note", "notes", "rhythm", "rhythms",
                "shield", "shields", "string", "strings", "studio", "studios",
                "track", "tracks",
            ],
        },
        AspectDef {
            name: "retro_fusion",
            room: "qumu_8_bit_oasis",
            verbs: &[
                "code", "create", "design", "draw", "generate", "modulate", "paint",
                "process", "program", "remix", "render", "sequence", "sync",
                "synthesize", "tune",
            ],
            nouns: &[
                "beat", "beats", "bit", "bits", "chip", "chips", "oases", "oasis",
                "paradise", "paradises", "pixel", "pixels", "screen", "screens",
                "sprite", "sprites", "synth", "synths", "wave", "waves",
            ],
        },
        AspectDef {
            name: "kawaii_beats",
            room: "snails_house_beep_boop_arcade",
            verbs: &[
                "achieve", "beep", "boop", "bounce", "chime", "chirp", "dance",
                "jump", "level", "ping", "play", "score", "skip", "unlock", "win",
            ],
            nouns: &[
                "cabinet", "cabinets", "coin", "coins", "game", "games", "heart",
                "hearts", "melodies", "melody", "pixel", "pixels", "plush",
                "plushies", "sprite", "sprites", "token", "tokens", "tune", "tunes",
            ],
        },
    ],
};

static STEAMPUNK_MUSIC_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "steampunk_music_puzzle",
    name: "Trial of Clockwork Harmony",
    description: "Master the elements of steampunk through mechanical performance, temporal resonance, and aerial orchestration",
    success_template: "The machinery responds to your command. The {aspect} grows stronger.",
    completion_message: "The clockwork mechanisms align as mechanics, time, and wind unite. A steam-powered path opens through the gears!",
    aspects: &[
        AspectDef {
            name: "mechanical_performance",
            room: "steam_powered_giraffes_clockwork_stage",
            verbs: &[
                "adjust", "align", "calibrate", "dance", "gesture", "maintain",
                "move", "operate", "perform", "regulate", "sing", "sync", "tune",
                "turn", "wind",
            ],
            nouns: &[
                "automaton", "automatons", "boiler", "boilers", "brass", "brasses",
                "gear", "gears", "lever", "levers", "pipe", "pipes", "spring",
                "springs", "stage", "stages", "steam", "steams", "valve", "valves",
            ],
        },
        AspectDef {
            name: "temporal_resonance",
            room: "the_cog_is_deads_temporal_laboratory",
            verbs: &[
                "analyze", "bend", "calculate", "experiment", "flow", "measure",
                "observe", "oscillate", "reverse", "rotate", "shift", "spin",
                "tick", "turn", "warp",
            ],
            nouns: &[
                "chronometer", "chronometers", "clock", "clocks", "device",
                "devices", "experiment", "experiments", "instrument", "instruments",
                "mechanism", "mechanisms", "moment", "moments", "note", "notes",
                "rhythm", "rhythms", "time", "times",
            ],
        },
        AspectDef {
            name: "aerial_orchestration",
            room: "abney_parks_steampunk_airship",
            verbs: &[
                "compose", "conduct", "direct", "drift", "float", "glide", "guide",
                "harmonize", "hover", "navigate", "orchestrate", "pilot", "sail",
                "soar", "steer",
            ],
            nouns: &[
                "chart", "charts", "cloud", "clouds", "compass", "compasses",
                "deck", "decks", "horn", "horns", "hull", "hulls", "instrument",
                "instruments", "propeller", "propellers", "sail", "sails", "wind",
                "winds",
            ],
        },
    ],
};

static NOSTALGIA_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "nostalgia_puzzle",
    name: "Trial of Childhood Memory",
    description: "Master the elements of nostalgia through neighborly kindness, wonderland mischief, robotic innocence, and royal memories",
    success_template: "The memories respond to your command. The {aspect} grows stronger.",
    completion_message: "The nostalgic forces unite as kindness, mischief, innocence, and royalty combine, opening a heartwarming path through memory!",
    aspects: &[
        AspectDef {
            name: "neighborly_kindness",
            room: "mr_rogers_nostalgic_nexus",
            verbs: &[
                "care", "comfort", "create", "discover", "explore", "greet", "help",
                "imagine", "learn", "listen", "share", "smile", "support", "teach",
                "welcome",
            ],
            nouns: &[
                "cardigan", "cardigans", "friend", "friends", "home", "homes",
                "neighbor", "neighbors", "puppet", "puppets", "room", "rooms",
                "shoe", "shoes", "smile", "smiles", "song", "songs", "toy", "toys",
            ],
        },
        AspectDef {
            name: "wonderland_mischief",
            room: "mad_hatters_temporal_trap",
            verbs: &[
                "dance", "drink", "laugh", "play", "pour", "riddle", "serve",
                "sing", "sip", "spin", "stir", "tick", "tock", "twist", "whirl",
            ],
            nouns: &[
                "cake", "cakes", "clock", "clocks", "cup", "cups", "moment",
                "moments", "parties", "party", "puzzle", "puzzles", "riddle",
                "riddles", "tea", "teas", "time", "times", "watch", "watches",
            ],
        },
        AspectDef {
            name: "robotic_innocence",
            room: "walles_wonderful_world",
            verbs: &[
                "care", "clean", "collect", "discover", "examine", "explore",
                "find", "gather", "nurture", "observe", "protect", "sort", "stack",
                "study", "tend",
            ],
            nouns: &[
                "boot", "boots", "cube", "cubes", "plant", "plants", "puzzle",
                "puzzles", "song", "songs", "tape", "tapes", "tower", "towers",
                "treasure", "treasures", "trinket", "trinkets", "world", "worlds",
            ],
        },
        AspectDef {
            name: "royal_nostalgia",
            room: "queen_of_hearts_grim_garden_party",
            verbs: &[
                "celebrate", "command", "dance", "decree", "feast", "grow", "judge",
                "paint", "plant", "play", "proclaim", "prune", "rule", "sing",
                "tend",
            ],
            nouns: &[
                "cake", "cakes", "card", "cards", "court", "courts", "crown",
                "crowns", "garden", "gardens", "guard", "guards", "heart", "hearts",
                "rose", "roses", "tart", "tarts", "throne", "thrones",
            ],
        },
    ],
};

static CREATIVE_CONVERGENCE_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "creative_convergence_puzzle",
    name: "Trial of Creative Mastery",
    description: "Master the elements of creativity through artistic vision, surreal transformation, inventive brilliance, and master building",
    success_template: "The creativity responds to your command. The {aspect} grows stronger.",
    completion_message: "The creative forces unite as painting, surrealism, invention, and master building combine, opening a whimsical path through imagination!",
    aspects: &[
        AspectDef {
            name: "artistic_vision",
            room: "bob_ross_haven",
            verbs: &[
                "blend", "compose", "craft", "create", "dab", "dream", "envision",
                "form", "grow", "imagine", "nurture", "paint", "plant", "shape",
                "stroke",
            ],
            nouns: &[
                "brush", "brushes", "canvas", "canvases", "cloud", "clouds",
                "easel", "easels", "friend", "friends", "joy", "joys", "light",
                "lights", "palette", "palettes", "studio", "studios", "tree",
                "trees",
            ],
        },
        AspectDef {
            name: "surreal_transformation",
            room: "cheshire_cats_grinning_abyss",
            verbs: &[
                "dance", "fade", "float", "giggle", "glide", "grin", "laugh",
                "morph", "shift", "smile", "smirk", "spiral", "swirl", "twist",
                "warp",
            ],
            nouns: &[
                "abyss", "abysses", "bottle", "bottles", "dream", "dreams", "grin",
                "grins", "mist", "mists", "potion", "potions", "realities",
                "reality", "shadow", "shadows", "smile", "smiles", "void", "voids",
            ],
        },
        AspectDef {
            name: "inventive_brilliance",
            room: "megaminds_misguided_mansion",
            verbs: &[
                "analyze", "build", "calculate", "create", "design", "display",
                "dramatize", "experiment", "flourish", "gesture", "invent",
                "measure", "pose", "present", "test",
            ],
            nouns: &[
                "beam", "beams", "cape", "capes", "collar", "collars", "device",
                "devices", "genius", "geniuses", "invention", "inventions", "lair",
                "lairs", "mansion", "mansions", "minion", "minions", "ray", "rays",
            ],
        },
        AspectDef {
            name: "master_building",
            room: "utopian_lego_city",
            verbs: &[
                "assemble", "build", "connect", "construct", "craft", "create",
                "design", "follow", "form", "learn", "make", "master", "read",
                "stack", "study",
            ],
            nouns: &[
                "block", "blocks", "brick", "bricks", "building", "buildings",
                "cities", "city", "design", "designs", "guide", "guides", "manual",
                "manuals", "model", "models", "structure", "structures", "tower",
                "towers",
            ],
        },
    ],
};

static CHILDHOOD_PUZZLE: PuzzleBlueprint = PuzzleBlueprint {
    id: "childhood_puzzle",
    name: "Trial of Wonder",
    description: "Master the elements of childhood through appliance friendship, electric adventure, infinite snacks, and eternal triumph",
    success_template: "The wonder responds to your command. The {aspect} grows stronger.",
    completion_message: "The childhood dreams unite as friendship, adventure, delight, and triumph combine, opening a magical path through wonder!",
    aspects: &[
        AspectDef {
            name: "appliance_friendship",
            room: "the_brave_little_toasters_appliance_uprising",
            verbs: &[
                "assemble", "band", "comfort", "direct", "encourage", "gather",
                "guide", "help", "inspire", "join", "lead", "protect", "rally",
                "support", "unite",
            ],
            nouns: &[
                "allies", "ally", "courage", "courages", "dream", "dreams",
                "families", "family", "friend", "friends", "heart", "hearts",
                "lamp", "lamps", "spirit", "spirits", "team", "teams", "toaster",
                "toasters",
            ],
        },
        AspectDef {
            name: "electric_adventure",
            room: "blankas_electrifying_jungle",
            verbs: &[
                "attack", "blast", "charge", "crackle", "dash", "flash", "flip",
                "jump", "roll", "shock", "spark", "spin", "strike", "surge", "zap",
            ],
            nouns: &[
                "cloud", "clouds", "energies", "energy", "jungle", "jungles",
                "lightning", "lightnings", "move", "moves", "power", "powers",
                "skill", "skills", "storm", "storms", "thunder", "thunders", "tree",
                "trees",
            ],
        },
        AspectDef {
            name: "infinite_snacks",
            room: "sheetz_station_of_infinite_delight",
            verbs: &[
                "blend", "craft", "create", "delight", "drink", "enjoy", "indulge",
                "mix", "munch", "nibble", "prepare", "relish", "savor", "sip",
                "taste",
            ],
            nouns: &[
                "aisle", "aisles", "delight", "delights", "drink", "drinks", "joy",
                "joys", "magic", "magics", "shelf", "shelves", "slushie",
                "slushies", "snack", "snacks", "treat", "treats", "wonder",
                "wonders",
            ],
        },
        AspectDef {
            name: "eternal_triumph",
            room: "pickleball_court_of_eternal_triumph",
            verbs: &[
                "achieve", "celebrate", "cheer", "conquer", "dance", "dink",
                "laugh", "master", "rally", "serve", "smash", "smile", "triumph",
                "volley", "win",
            ],
            nouns: &[
                "ball", "balls", "court", "courts", "joy", "joys", "line", "lines",
                "paddle", "paddles", "partner", "partners", "spirit", "spirits",
                "team", "teams", "trophies", "trophy", "victories", "victory",
            ],
        },
    ],
};
