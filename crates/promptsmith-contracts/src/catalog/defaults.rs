use indexmap::IndexMap;

use super::{QuickTemplate, TraitCategory, WorldTables, DEFAULT_WORLD};
use crate::subjects::SubjectKind;

pub(super) fn default_universal() -> IndexMap<TraitCategory, Vec<String>> {
    let mut map = IndexMap::new();

    let mut insert = |category: TraitCategory, options: &[&str]| {
        map.insert(category, to_strings(options));
    };

    insert(
        TraitCategory::Gender,
        &["Female", "Male", "Non-binary", "Androgynous"],
    );
    insert(
        TraitCategory::Age,
        &[
            "18-25", "26-35", "36-45", "46-55", "56-65", "66-75", "76-85", "86+",
        ],
    );
    insert(
        TraitCategory::Body,
        &[
            "Slim", "Athletic", "Muscular", "Curvy", "Plus-sized", "Tall", "Petite", "Average",
        ],
    );
    insert(
        TraitCategory::SkinTone,
        &[
            "Pale", "Fair", "Medium", "Olive", "Tan", "Dark", "Deep Ebony", "Porcelain",
            "Sun-kissed", "Metallic", "Alien",
        ],
    );
    insert(
        TraitCategory::SkinTexture,
        &[
            "Photorealistic Skin",
            "Hyper-realistic Pores",
            "Smooth Porcelain",
            "Weathered Skin",
            "Weathered & Leathery",
            "Detailed Wrinkles",
            "Fine Wrinkles",
            "Deep Wrinkles",
            "Natural Imperfections",
            "Sweat & Moisture",
            "Subsurface Scattering",
            "Translucent Skin",
            "Raw Skin Texture",
            "Airbrushed",
            "Oily Skin",
            "Dry Skin",
            "Makeup Powder",
            "Scarred Texture",
            "Detailed Pores",
            "Rough Skin",
        ],
    );
    insert(
        TraitCategory::Tattoos,
        &[
            "No Tattoos",
            "Full Sleeve Tattoo",
            "Neck Tattoo",
            "Face Tattoos",
            "Tribal Tattoos",
            "Floral Tattoos",
            "Minimalist Tattoos",
            "Knuckle Tattoos",
            "Back Tattoo",
            "Chest Piece",
            "Henna Art",
            "Cybernetic Lines",
            "Gold Leaf Paint",
            "War Paint",
            "Runes",
        ],
    );
    insert(
        TraitCategory::EyeColor,
        &[
            "Blue", "Green", "Brown", "Hazel", "Grey", "Amber", "Violet", "Black", "Red",
            "Glowing", "Heterochromia",
        ],
    );
    insert(
        TraitCategory::HairStyle,
        &[
            "Straight",
            "Wavy",
            "Curly",
            "Coily",
            "Afro",
            "Buzz Cut",
            "Bald",
            "Crew Cut",
            "Bob Cut",
            "Pixie Cut",
            "Long Layers",
            "Messy Bun",
            "Braids",
            "Dreadlocks",
            "Mohawk",
            "Undercut",
            "Ponytail",
        ],
    );
    insert(
        TraitCategory::HairColor,
        &[
            "Blonde",
            "Platinum",
            "Dirty Blonde",
            "Brunette",
            "Dark Brown",
            "Black",
            "Raven",
            "Red",
            "Ginger",
            "Auburn",
            "White",
            "Silver",
            "Grey",
            "Pastel Pink",
            "Neon Green",
            "Blue",
            "Purple",
            "Ombre",
        ],
    );
    insert(
        TraitCategory::FacialHair,
        &[
            "Clean Shaven",
            "Light Stubble",
            "Heavy Stubble",
            "Goatee",
            "Mustache",
            "Handlebar Mustache",
            "Full Beard",
            "Viking Beard",
            "Chinstrap",
            "Mutton Chops",
            "Soul Patch",
        ],
    );
    insert(
        TraitCategory::FacialHairColor,
        &[
            "Match Hair",
            "Blonde",
            "Brown",
            "Black",
            "Red",
            "Grey",
            "White",
            "Salt and Pepper",
        ],
    );
    insert(
        TraitCategory::FacialFeature,
        &[
            "Natural Look",
            "Freckles",
            "Acne",
            "Scarred",
            "Birthmark",
            "Rosy Cheeks",
            "High Cheekbones",
            "Sharp Jawline",
            "Soft Jawline",
            "Cleft Chin",
            "Dimples",
            "Weathered Skin",
            "Perfect Skin",
            "Wrinkles",
            "Makeup",
            "War Paint",
            "Face Tattoos",
            "Piercings",
        ],
    );
    insert(
        TraitCategory::Emotion,
        &[
            "Happy",
            "Angry",
            "Sad",
            "Laughing",
            "Flirty",
            "Sexy",
            "Seductive",
            "Serious",
            "Surprised",
            "Mysterious",
            "Determined",
            "Bored",
            "Neutral",
            "Ecstatic",
            "Grimacing",
            "Peaceful",
            "Smirking",
            "Terrified",
            "Awestruck",
            "Disgusted",
            "Confident",
            "Shy",
            "Playful",
            "Crying",
            "Screaming",
        ],
    );
    insert(
        TraitCategory::Footwear,
        &[
            "Match Outfit",
            "Barefoot",
            "Sneakers",
            "High Heels",
            "Stilettos",
            "Combat Boots",
            "Leather Boots",
            "Sandals",
            "Flip Flops",
            "Running Shoes",
            "Dress Shoes",
            "Loafers",
            "Thigh-high Boots",
            "Ankle Boots",
            "Platform Shoes",
            "Geta Sandals",
        ],
    );
    insert(
        TraitCategory::Pose,
        &[
            "Standing",
            "Sitting",
            "Walking",
            "Running",
            "Fighting Stance",
            "Floating",
            "Reclining",
            "Dancing",
            "Hands on Hips",
            "Arms Crossed",
            "Pointing",
            "Waving",
            "Saluting",
            "Cheering / Arms Up",
            "Hands Clasped",
            "Touching Face",
            "Adjusting Glasses",
            "Hands in Pockets",
            "Hand on Chin (Thinking)",
            "Arms Outstretched",
            "Shrugging",
            "Thumbs Up",
            "Peace Sign",
            "Hands behind Head",
            "Sitting Cross-legged",
            "Kneeling",
            "Kneeling on one knee",
            "Leaning against wall",
            "Lying on Back",
            "Lying on Stomach",
            "Crouching",
            "Sitting on Chair",
            "Taking a Selfie",
            "Looking over shoulder back at camera",
            "Laughing Head Back",
            "Aiming Weapon",
            "Jumping",
            "Falling",
            "Spinning",
            "Punching",
            "Kicking",
            "Dodging",
            "Parkour Vault",
            "Diving",
            "Sliding",
            "Yoga: Tree Pose",
            "Yoga: Downward Dog",
            "Yoga: Lotus Position",
            "Yoga: Warrior I",
            "Yoga: Warrior II",
            "Yoga: Cobra Pose",
            "Yoga: Plank",
            "Yoga: Child's Pose",
            "Yoga: Headstand",
            "Meditating",
            "Yoga: Crow Pose",
            "Yoga: Bridge Pose",
            "Yoga: Triangle Pose",
            "Pilates Stretch",
            "Deep Squat",
        ],
    );
    insert(
        TraitCategory::Framing,
        &[
            "Wide Shot",
            "Full Body",
            "Waist Up",
            "Portrait",
            "Extreme Close-up",
            "Low Angle",
            "High Angle",
            "Overhead",
            "Side Profile",
            "Back View",
            "Isometric",
            "Dutch Angle",
            "Point of View (POV)",
            "Tracking Shot",
            "Drone Shot",
        ],
    );
    insert(
        TraitCategory::Lighting,
        &[
            "Natural Sunlight",
            "Golden Hour",
            "Studio Lighting",
            "Cinematic Lighting",
            "Dark & Moody",
            "Neon Lights",
            "Soft Moonlight",
            "Overcast",
            "Firelight",
            "Bioluminescent",
            "Rembrandt Lighting",
            "Volumetric Fog",
            "Global Illumination",
            "Ambient Occlusion",
            "God Rays",
            "Rim Lighting",
            "Chiaroscuro",
            "Diffused Lighting",
            "Hard Light",
            "Soft Box",
            "Rim Light",
        ],
    );
    insert(
        TraitCategory::Weather,
        &[
            "Sunny", "Rainy", "Snowy", "Foggy", "Stormy", "Cloudy", "Windy", "Hail", "Mist",
            "Clear Skies",
        ],
    );
    insert(
        TraitCategory::Lens,
        &[
            "16mm Wide",
            "24mm Wide",
            "35mm Street",
            "50mm Prime",
            "85mm Portrait",
            "135mm Telephoto",
            "200mm Zoom",
            "Macro 100mm",
            "Fisheye",
            "Tilt-Shift",
            "Anamorphic",
            "Vintage Glass",
        ],
    );
    insert(
        TraitCategory::Focus,
        &[
            "f/1.4 Shallow Depth",
            "f/1.8 Bokeh",
            "f/2.8 Separation",
            "f/5.6 Sharp",
            "f/8 Deep Focus",
            "f/16 Landscape",
            "f/22 Sunstars",
            "Rack Focus",
            "Soft Focus Filter",
        ],
    );
    insert(
        TraitCategory::Motion,
        &[
            "1/4000s Freeze Action",
            "1/1000s High Speed",
            "1/60s Motion Blur",
            "1s Long Exposure",
            "30s Light Trails",
            "Panning Shot",
            "Action Blur",
            "Static / Tripod",
        ],
    );
    insert(
        TraitCategory::ImageQuality,
        &[
            "Extreme Realism",
            "Masterpiece",
            "8k UHD",
            "RAW Photo",
            "Cinematic",
            "Hyper-Detailed",
            "Sharp Focus",
            "Soft Focus",
            "Film Grain",
            "Heavy Film Grain",
            "Fine Film Grain",
            "HDR",
            "Best Quality",
            "Vivid Colors",
            "Muted Tones",
            "Analog Film",
            "Ray Tracing",
            "Global Illumination",
            "Ambient Occlusion",
            "Chromatic Aberration",
        ],
    );

    map
}

pub(super) fn default_worlds() -> IndexMap<String, WorldTables> {
    let mut map = IndexMap::new();

    let mut insert = |name: &str, roles: &[&str], clothing: &[&str], environments: &[&str]| {
        map.insert(
            name.to_string(),
            WorldTables {
                roles: to_strings(roles),
                clothing: to_strings(clothing),
                environments: to_strings(environments),
            },
        );
    };

    insert(
        DEFAULT_WORLD,
        &[
            "Mom",
            "Dad",
            "Doctor",
            "Lawyer",
            "Construction Worker",
            "Student",
            "Artist",
            "Influencer",
            "Athlete",
            "Police Officer",
            "Teacher",
            "Business Executive",
            "Barista",
            "Musician",
            "Chef",
            "Social Media Manager",
            "Tech CEO",
            "Nurse",
            "Firefighter",
            "Yoga Instructor",
            "Personal Trainer",
            "Gamer",
            "Startup Founder",
            "Paramedic",
            "Architect",
            "Graphic Designer",
            "Photographer",
        ],
        &[
            "Casual (Jeans & T-Shirt)",
            "Business Suit",
            "Summer Dress",
            "Winter Coat",
            "Gym Wear",
            "Evening Gown",
            "Streetwear",
            "Work Uniform",
            "Hoodie & Joggers",
            "Scrubs",
            "Leather Jacket",
            "Bathing Suit",
            "Board Shorts",
            "Yoga Outfit",
            "Cocktail Dress",
            "Tuxedo",
            "Trench Coat",
            "Flannel Shirt",
            "Pajamas",
            "One-Piece Swimsuit",
            "Rash Guard",
            "Beach Cover-up / Sarong",
            "Wetsuit",
            "Resort Wear",
            "Explorer Gear",
            "Tactical Vest & Cargo Pants",
            "Safari Outfit",
            "Hipster Cardigan",
            "Denim Jacket",
            "Overalls",
            "Tracksuit",
            "Silk Robe",
            "Halloween: Witch",
            "Halloween: Superhero",
            "Halloween: Vampire",
            "Denim Shorts",
            "Cargo Shorts",
            "Mini Skirt",
            "Crop Top",
            "Oversized Sweater",
        ],
        &[
            "Suburban Home",
            "Modern Office",
            "City Park",
            "Coffee Shop",
            "Busy Street",
            "Supermarket",
            "Luxury Apartment",
            "Sunny Beach",
            "Gym",
            "Restaurant",
            "Rooftop Bar",
            "Subway Station",
            "Public Library",
            "Shopping Mall",
            "Swimming Pool",
            "Airport Terminal",
            "Concert Venue",
            "Art Gallery",
            "Cozy Bedroom",
            "Modern Kitchen",
            "Co-working Space",
            "Recording Studio",
            "Gaming Room",
            "Hospital Hallway",
            "Fire Station",
        ],
    );
    insert(
        "Fantasy / Medieval",
        &[
            "Knight",
            "Wizard",
            "Elf",
            "Orc",
            "Princess",
            "Blacksmith",
            "Rogue",
            "King",
            "Queen",
            "Dragon Tamer",
            "Warrior",
            "Archer",
            "Sorceress",
            "Bard",
            "Paladin",
            "Druid",
            "Necromancer",
            "Warlock",
            "Monk",
            "Ranger",
            "Barbarian",
            "Cleric",
            "Assassin",
            "Alchemist",
            "Artificer",
        ],
        &[
            "Plate Armor",
            "Chainmail",
            "Wizard Robes",
            "Leather Tunic",
            "Royal Gown",
            "Tattered Cloak",
            "Peasant Rags",
            "Fur-lined Cape",
            "Elven Silk",
            "Ranger Gear",
            "Monk Robes",
            "Studded Leather",
            "Scale Mail",
            "Noble Velvet Doublet",
            "Peasant Smock",
            "Merchant's Vest",
            "Noble Velvet Robes",
            "Leather Scout Armor",
            "Cultist Robes",
            "Jester Outfit",
            "Rusty Chainmail",
            "Ceremonial Robes",
            "Battle-worn Armor",
            "Leather Harness",
            "Simple Shift Dress",
        ],
        &[
            "Ancient Castle",
            "Mystic Forest",
            "Dungeon",
            "Medieval Tavern",
            "Dragon's Lair",
            "Snowy Mountain Peak",
            "Elven City",
            "Battlefield",
            "Throne Room",
            "Enchanted Glade",
            "Wizard's Tower",
            "Haunted Graveyard",
            "Underdark Cavern",
            "Sacred Temple",
            "Market Square",
        ],
    );
    insert(
        "Sci-Fi / Cyberpunk",
        &[
            "Cyborg",
            "Space Marine",
            "Hacker",
            "Bounty Hunter",
            "Android",
            "Pilot",
            "Scientist",
            "Street Samurai",
            "Alien Diplomat",
            "Technomancer",
        ],
        &[
            "Neon-lit Armor",
            "Tactical Space Suit",
            "Cybernetic Implants",
            "Leather Trench Coat",
            "Holographic Fashion",
            "Flight Suit",
            "Utility Jumpsuit",
            "Exoskeleton",
            "Dystopian Scavenger Outfit",
            "Techwear Street Style",
            "Lab Coat",
            "Zero-G Suit",
            "Hacker Hoodie",
            "Chrome Plated Suit",
            "Biosuit",
            "Latex Bodysuit",
            "Tactical Shorts",
            "Cybernetic Limbs",
            "Transparent Plastic Jacket",
            "LED Visor",
        ],
        &[
            "Neon City at Night",
            "Space Station",
            "Alien Planet",
            "Cyberpunk Alleyway",
            "High-tech Lab",
            "Spaceship Cockpit",
            "Wasteland",
            "Mega-Corporation HQ",
            "Virtual Reality",
        ],
    );
    insert(
        "Historical",
        &[
            "Viking Raider",
            "Shield Maiden",
            "Viking Jarl",
            "Berserker",
            "Victorian Gentleman",
            "Noblewoman",
            "Cowboy",
            "Pirate",
            "Samurai",
            "Geisha",
            "Soldier (WW2)",
            "Pharaoh",
            "Gladiator",
            "Renaissance Painter",
            "Explorer",
        ],
        &[
            "Viking Furs",
            "Chainmail & Fur",
            "Bear Pelt Cloak",
            "Nordic Leather Armor",
            "Victorian Suit",
            "Corset & Gown",
            "Cowboy Hat & Duster",
            "Kimono",
            "Military Uniform",
            "Egyptian Robes",
            "Toga",
            "Tweed Suit",
            "Silk Sari",
            "Roman Toga",
            "Spartan Armor",
            "Colonial Coat",
            "Renaissance Doublet",
            "Victorian Mourning Dress",
            "Gladiator Armor",
            "Pilgrim Outfit",
            "Breeches",
            "Kilt",
        ],
        &[
            "Viking Longship",
            "Nordic Fjord",
            "Viking Longhouse",
            "Snowy Village",
            "Victorian London Street",
            "Wild West Saloon",
            "Pirate Ship Deck",
            "Ancient Egypt",
            "Kyoto Temple",
            "Roman Colosseum",
            "Battlefield Trenches",
            "Ballroom",
        ],
    );

    map
}

pub(super) fn default_subjects() -> IndexMap<SubjectKind, Vec<String>> {
    let mut map = IndexMap::new();
    map.insert(
        SubjectKind::Animal,
        to_strings(&[
            "Wolf", "Tiger", "Eagle", "Horse", "Cat", "Dog", "Owl", "Bear", "Lion", "Raven",
            "Snake", "Fox", "Elephant", "Shark",
        ]),
    );
    map.insert(
        SubjectKind::Creature,
        to_strings(&[
            "Dragon",
            "Phoenix",
            "Griffon",
            "Unicorn",
            "Goblin",
            "Fairy",
            "Robot",
            "Demon",
            "Ghost",
            "Alien",
            "Beholder",
            "Owlbear",
            "Mind Flayer",
            "Displacer Beast",
            "Gelatinous Cube",
            "Mimic",
            "Lich",
            "Kobold",
            "Tarrasque",
            "Chimera",
            "Basilisk",
            "Hydra",
            "Pegasus",
            "Centaur",
            "Mermaid",
            "Kraken",
        ]),
    );
    map.insert(
        SubjectKind::Object,
        to_strings(&[
            "Magic Orb",
            "Ancient Book",
            "Guitar",
            "Laptop",
            "Coffee Cup",
            "Bouquet of Flowers",
            "Smartphone",
            "Lantern",
            "Crystal",
            "Skull",
            "Treasure Chest",
            "Potion Bottle",
            "Viking Horn",
            "Scroll",
            "Hologram Projector",
            "Briefcase",
            "Microphone",
            "Canvas & Easel",
            "Backpack",
        ]),
    );
    map.insert(
        SubjectKind::Weapon,
        to_strings(&[
            "Sword",
            "Shield",
            "Bow and Arrow",
            "Laser Gun",
            "Magic Staff",
            "Dagger",
            "Battle Axe",
            "Katana",
            "Revolver",
            "Warhammer",
            "Viking Axe",
            "Spear",
            "Crossbow",
            "Musket",
            "Sniper Rifle",
            "Lightsaber",
            "Energy Sword",
            "Morningstar",
            "Trident",
            "Throwing Knives",
            "Whip",
        ]),
    );
    map.insert(
        SubjectKind::Vehicle,
        to_strings(&[
            "Motorcycle",
            "Sports Car",
            "SUV",
            "Pickup Truck",
            "Bicycle",
            "Private Jet",
            "Yacht",
            "Helicopter",
            "Horse Carriage",
            "Chariot",
            "Viking Longship",
            "Wooden Raft",
            "Steam Train",
            "War Elephant",
            "Spaceship",
            "Mech Suit",
            "Hoverbike",
            "Flying Car",
            "Space Rover",
            "Teleporter Pod",
        ]),
    );
    map.insert(
        SubjectKind::Person,
        to_strings(&[
            "Child",
            "Soldier",
            "Mysterious Stranger",
            "Robot Companion",
            "Bodyguard",
            "Villain",
            "Merchant",
        ]),
    );
    map
}

pub(super) fn default_subject_actions() -> Vec<String> {
    to_strings(&[
        "Standing next to",
        "Holding",
        "Riding",
        "Fighting",
        "Chasing",
        "Sitting on",
        "Ignoring",
        "Protecting",
        "Talking to",
        "Carrying",
        "Surrounded by",
        "Summoning",
    ])
}

pub(super) fn default_templates() -> Vec<QuickTemplate> {
    let rows: &[(&str, &str)] = &[
        (
            "Modern Portrait",
            "Photorealistic portrait of a young artist in a sunlit studio, paint splatters on apron, soft natural lighting, 85mm lens, f/1.8 aperture.",
        ),
        (
            "Cyberpunk City",
            "Neon-lit futuristic city street at night, rain reflecting on pavement, holographic advertisements, cyberpunk aesthetic, wide-angle lens.",
        ),
        (
            "Epic Fantasy",
            "A majestic dragon perched on a mountain peak, breathing fire, storm clouds gathering, epic fantasy art style, deep focus.",
        ),
        (
            "Viking Warrior",
            "Cinematic shot of a fierce Viking shield maiden standing on a longship, storm raging, lightning in the background, hyper-realistic, slow motion rain droplets.",
        ),
        (
            "Space Station",
            "Interior of a high-tech space station, sleek white surfaces, holographic displays, view of a blue planet through the window, sharp focus.",
        ),
        (
            "Victorian London",
            "Foggy London street in 1890, gas lamps glowing, cobblestone road, mystery novel atmosphere, 35mm lens.",
        ),
        (
            "Samurai",
            "Samurai warrior standing in a field of cherry blossoms, feudal Japan, cinematic composition, falling petals, slight motion blur.",
        ),
        (
            "Cozy Coffee Shop",
            "Interior of a cozy coffee shop on a rainy day, warm lighting, steam rising from a cup, lo-fi aesthetic, bokeh background.",
        ),
        (
            "Gourmet Food",
            "Professional food photography of a gourmet burger with melting cheese, rustic wooden table, dramatic studio lighting, macro shot.",
        ),
    ];
    rows.iter()
        .map(|(label, text)| QuickTemplate {
            label: (*label).to_string(),
            text: (*text).to_string(),
        })
        .collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
