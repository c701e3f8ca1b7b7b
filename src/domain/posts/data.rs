use super::SeedPost;

pub static SEED_POSTS: [SeedPost; 20] = [
    SeedPost {
        user_id: 1,
        title: "Reading the morning paper again",
        body: "I cancelled the news apps and went back to a printed paper. The news is a day old and that turns out to be fine.",
    },
    SeedPost {
        user_id: 1,
        title: "A short list of tools I actually use",
        body: "A text editor, a terminal, a notebook with squared paper and a timer. Everything else comes and goes.",
    },
    SeedPost {
        user_id: 1,
        title: "Why the bread failed this week",
        body: "The kitchen was cold and the starter was sluggish. Next time the dough proofs next to the radiator.",
    },
    SeedPost {
        user_id: 1,
        title: "Notes from a rainy bike commute",
        body: "Fenders matter more than a waterproof jacket. Dry shoes matter more than both.",
    },
    SeedPost {
        user_id: 1,
        title: "Learning to sketch in ten minutes a day",
        body: "Small daily sketches beat the occasional long session. The pencil stays on the desk so starting costs nothing.",
    },
    SeedPost {
        user_id: 2,
        title: "Moving a garden bed in autumn",
        body: "Roots settle over winter, so autumn is the calm season to move perennials. Water once, then leave them alone.",
    },
    SeedPost {
        user_id: 2,
        title: "The library card is underrated",
        body: "Audiobooks, magazines and a quiet room to work in, all for free. I renewed mine and regret waiting so long.",
    },
    SeedPost {
        user_id: 2,
        title: "Fixing a squeaky door hinge",
        body: "Lift the pin, wipe it, add a drop of oil and tap it back in. Two minutes of work for months of silence.",
    },
    SeedPost {
        user_id: 2,
        title: "What a week without email taught me",
        body: "Most messages answered themselves. The ones that did not were important enough to arrive by phone.",
    },
    SeedPost {
        user_id: 2,
        title: "Batch cooking on Sunday afternoons",
        body: "One pot of beans, one tray of roasted vegetables and a jar of dressing cover most lunches of the week.",
    },
    SeedPost {
        user_id: 3,
        title: "Walking the old railway line",
        body: "The track is gone but the embankment remains, and it makes a flat and quiet path through the fields.",
    },
    SeedPost {
        user_id: 3,
        title: "Tuning a second hand guitar",
        body: "New strings, a small truss rod adjustment and a lot of patience turned a wall ornament into an instrument.",
    },
    SeedPost {
        user_id: 3,
        title: "Keeping a paper calendar",
        body: "Writing an appointment down by hand makes me remember it. The phone still sends reminders as a backup.",
    },
    SeedPost {
        user_id: 3,
        title: "A field guide to local birds",
        body: "Five species account for most of what visits the feeder. Learning their calls made every walk more interesting.",
    },
    SeedPost {
        user_id: 3,
        title: "Repairing instead of replacing",
        body: "A new zipper, a resoled pair of boots and a reglued chair. Each repair was cheaper than expected.",
    },
    SeedPost {
        user_id: 4,
        title: "Starting a neighbourhood tool library",
        body: "Most drills are used for minutes per year. A shared shelf in the community hall now holds twenty of them.",
    },
    SeedPost {
        user_id: 4,
        title: "Cold water swimming for beginners",
        body: "Go in slowly, stay in briefly and bring a warm drink for afterwards. Never swim alone.",
    },
    SeedPost {
        user_id: 4,
        title: "Photographing the same tree every month",
        body: "Twelve pictures from one spot show a whole year. The project takes five minutes a month.",
    },
    SeedPost {
        user_id: 4,
        title: "Planning a trip by train",
        body: "Slower than flying, but the journey becomes part of the trip and the stations are in the middle of town.",
    },
    SeedPost {
        user_id: 4,
        title: "The case for a smaller desk",
        body: "Less surface means less clutter. Whatever does not fit on the desk goes back where it belongs.",
    },
];
