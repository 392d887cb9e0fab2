//! Fixed call tables: traditional nicknames and phrase templates.

/// Placeholder replaced by the spoken form of the ball in phrase templates.
pub const SPOKEN_PLACEHOLDER: &str = "{spoken}";

/// Traditional hall nicknames, indexed by `number - 1`.
pub static TRADITIONAL_CALLS: [&str; 75] = [
    "Kelly's Eye",
    "One Little Duck",
    "Cup of Tea",
    "Knock at the Door",
    "Man Alive",
    "Half a Dozen",
    "Lucky Seven",
    "Garden Gate",
    "Doctor's Orders",
    "Uncle Ben",
    "Legs Eleven",
    "One Dozen",
    "Unlucky for Some",
    "Valentine's Day",
    "Young and Keen",
    "Sweet Sixteen",
    "Dancing Queen",
    "Coming of Age",
    "Goodbye Teens",
    "One Score",
    "Key of the Door",
    "Two Little Ducks",
    "Thee and Me",
    "Two Dozen",
    "Duck and Dive",
    "Pick and Mix",
    "Gateway to Heaven",
    "Overweight",
    "Rise and Shine",
    "Dirty Gertie",
    "Get Up and Run",
    "Buckle My Shoe",
    "All the Threes",
    "Ask for More",
    "Jump and Jive",
    "Three Dozen",
    "More than Eleven",
    "Christmas Cake",
    "Thirty-Nine Steps",
    "Naughty Forty",
    "Time for Fun",
    "Winnie the Pooh",
    "Down on Your Knees",
    "Droopy Drawers",
    "Halfway There",
    "Up to Tricks",
    "Four and Seven",
    "Four Dozen",
    "Copper's Knock",
    "Half a Century",
    "Tweak of the Thumb",
    "Danny La Rue",
    "Stuck in the Tree",
    "Clean the Floor",
    "Snakes Alive",
    "Was She Worth It",
    "Heinz Varieties",
    "Make Them Wait",
    "Brighton Line",
    "Five Dozen",
    "Baker's Bun",
    "Tickety-Boo",
    "Tickle Me",
    "Red Raw",
    "Old Age Pension",
    "Clickety Click",
    "Stairway to Heaven",
    "Saving Grace",
    "Either Way Up",
    "Three Score and Ten",
    "Bang on the Drum",
    "Six Dozen",
    "Queen Bee",
    "Candy Store",
    "Strive and Strive",
];

pub static KID_FRIENDLY_PHRASES: &[&str] = &[
    "Give a cheer! It's {spoken}!",
    "Look at your card for {spoken}!",
    "Here comes {spoken}!",
    "Wiggle your fingers for {spoken}!",
    "Ready, set, {spoken}!",
    "Clap your hands, it's {spoken}!",
    "Super star number: {spoken}!",
    "Do you have {spoken}? Mark it!",
];

pub static PIRATE_PHRASES: &[&str] = &[
    "Arr! {spoken}, me hearties!",
    "Hoist the sails for {spoken}!",
    "X marks the spot: {spoken}!",
    "Shiver me timbers, it's {spoken}!",
    "Batten down the hatches, {spoken}!",
    "Yo ho ho, {spoken}!",
];

/// Traditional nickname for a number, if it is in 1-75.
pub fn nickname(number: u32) -> Option<&'static str> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    TRADITIONAL_CALLS.get(index).copied()
}

/// Substitute the spoken form into a template.
pub fn fill_template(template: &str, spoken: &str) -> String {
    template.replace(SPOKEN_PLACEHOLDER, spoken)
}
