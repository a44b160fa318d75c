//! Literal record tables
//!
//! Every table is a `'static` constant; derived views are computed from these
//! by the functions in [`crate::stats`].

use crate::types::{
    EconomicFact, GameRecord, HalftimeRecord, Kpi, QuarterLine, CHIEFS_RED, EAGLES_GREEN,
};
use chrono::NaiveDate;

const fn game(
    id: &'static str,
    year: u16,
    winner: &'static str,
    winner_score: u8,
    loser: &'static str,
    loser_score: u8,
    mvp: &'static str,
    venue: &'static str,
) -> GameRecord {
    GameRecord {
        id,
        year,
        winner,
        winner_score,
        loser,
        loser_score,
        mvp,
        venue,
    }
}

const fn show(
    game_id: &'static str,
    year: u16,
    performers: &'static str,
    genre: &'static str,
) -> HalftimeRecord {
    HalftimeRecord {
        game_id,
        year,
        performers,
        genre,
    }
}

const fn fact(category: &'static str, value: &'static str, detail: &'static str) -> EconomicFact {
    EconomicFact {
        category,
        value,
        detail,
    }
}

/// Every Super Bowl from I (1967) through LIX (2025), in chronological order
pub const SUPER_BOWLS: &[GameRecord] = &[
    game("I", 1967, "Green Bay Packers", 35, "Kansas City Chiefs", 10, "Bart Starr", "Los Angeles Memorial Coliseum, LA"),
    game("II", 1968, "Green Bay Packers", 33, "Oakland Raiders", 14, "Bart Starr", "Orange Bowl, Miami"),
    game("III", 1969, "New York Jets", 16, "Baltimore Colts", 7, "Joe Namath", "Orange Bowl, Miami"),
    game("IV", 1970, "Kansas City Chiefs", 23, "Minnesota Vikings", 7, "Len Dawson", "Tulane Stadium, New Orleans"),
    game("V", 1971, "Baltimore Colts", 16, "Dallas Cowboys", 13, "Chuck Howley", "Orange Bowl, Miami"),
    game("VI", 1972, "Dallas Cowboys", 24, "Miami Dolphins", 3, "Roger Staubach", "Tulane Stadium, New Orleans"),
    game("VII", 1973, "Miami Dolphins", 14, "Washington Redskins", 7, "Jake Scott", "LA Memorial Coliseum"),
    game("VIII", 1974, "Miami Dolphins", 24, "Minnesota Vikings", 7, "Larry Csonka", "Rice Stadium, Houston"),
    game("IX", 1975, "Pittsburgh Steelers", 16, "Minnesota Vikings", 6, "Franco Harris", "Tulane Stadium, New Orleans"),
    game("X", 1976, "Pittsburgh Steelers", 21, "Dallas Cowboys", 17, "Lynn Swann", "Orange Bowl, Miami"),
    game("XI", 1977, "Oakland Raiders", 32, "Minnesota Vikings", 14, "Fred Biletnikoff", "Rose Bowl, Pasadena"),
    game("XII", 1978, "Dallas Cowboys", 27, "Denver Broncos", 10, "Martin / White", "Superdome, New Orleans"),
    game("XIII", 1979, "Pittsburgh Steelers", 35, "Dallas Cowboys", 31, "Terry Bradshaw", "Orange Bowl, Miami"),
    game("XIV", 1980, "Pittsburgh Steelers", 31, "Los Angeles Rams", 19, "Terry Bradshaw", "Rose Bowl, Pasadena"),
    game("XV", 1981, "Oakland Raiders", 27, "Philadelphia Eagles", 10, "Jim Plunkett", "Superdome, New Orleans"),
    game("XVI", 1982, "San Francisco 49ers", 26, "Cincinnati Bengals", 21, "Joe Montana", "Silverdome, Pontiac"),
    game("XVII", 1983, "Washington Redskins", 27, "Miami Dolphins", 17, "John Riggins", "Rose Bowl, Pasadena"),
    game("XVIII", 1984, "Los Angeles Raiders", 38, "Washington Redskins", 9, "Marcus Allen", "Tampa Stadium"),
    game("XIX", 1985, "San Francisco 49ers", 38, "Miami Dolphins", 16, "Joe Montana", "Stanford Stadium"),
    game("XX", 1986, "Chicago Bears", 46, "New England Patriots", 10, "Richard Dent", "Superdome, New Orleans"),
    game("XXI", 1987, "New York Giants", 39, "Denver Broncos", 20, "Phil Simms", "Rose Bowl, Pasadena"),
    game("XXII", 1988, "Washington Redskins", 42, "Denver Broncos", 10, "Doug Williams", "Jack Murphy Stadium, SD"),
    game("XXIII", 1989, "San Francisco 49ers", 20, "Cincinnati Bengals", 16, "Jerry Rice", "Joe Robbie Stadium, Miami"),
    game("XXIV", 1990, "San Francisco 49ers", 55, "Denver Broncos", 10, "Joe Montana", "Superdome, New Orleans"),
    game("XXV", 1991, "New York Giants", 20, "Buffalo Bills", 19, "Ottis Anderson", "Tampa Stadium"),
    game("XXVI", 1992, "Washington Redskins", 37, "Buffalo Bills", 24, "Mark Rypien", "Metrodome, Minneapolis"),
    game("XXVII", 1993, "Dallas Cowboys", 52, "Buffalo Bills", 17, "Troy Aikman", "Rose Bowl, Pasadena"),
    game("XXVIII", 1994, "Dallas Cowboys", 30, "Buffalo Bills", 13, "Emmitt Smith", "Georgia Dome, Atlanta"),
    game("XXIX", 1995, "San Francisco 49ers", 49, "San Diego Chargers", 26, "Steve Young", "Joe Robbie Stadium, Miami"),
    game("XXX", 1996, "Dallas Cowboys", 27, "Pittsburgh Steelers", 17, "Larry Brown", "Sun Devil Stadium, Tempe"),
    game("XXXI", 1997, "Green Bay Packers", 35, "New England Patriots", 21, "Desmond Howard", "Superdome, New Orleans"),
    game("XXXII", 1998, "Denver Broncos", 31, "Green Bay Packers", 24, "Terrell Davis", "Qualcomm Stadium, SD"),
    game("XXXIII", 1999, "Denver Broncos", 34, "Atlanta Falcons", 19, "John Elway", "Pro Player Stadium, Miami"),
    game("XXXIV", 2000, "St. Louis Rams", 23, "Tennessee Titans", 16, "Kurt Warner", "Georgia Dome, Atlanta"),
    game("XXXV", 2001, "Baltimore Ravens", 34, "New York Giants", 7, "Ray Lewis", "Raymond James Stadium"),
    game("XXXVI", 2002, "New England Patriots", 20, "St. Louis Rams", 17, "Tom Brady", "Superdome, New Orleans"),
    game("XXXVII", 2003, "Tampa Bay Buccaneers", 48, "Oakland Raiders", 21, "Dexter Jackson", "Qualcomm Stadium, SD"),
    game("XXXVIII", 2004, "New England Patriots", 32, "Carolina Panthers", 29, "Tom Brady", "Reliant Stadium, Houston"),
    game("XXXIX", 2005, "New England Patriots", 24, "Philadelphia Eagles", 21, "Deion Branch", "Alltel Stadium, Jacksonville"),
    game("XL", 2006, "Pittsburgh Steelers", 21, "Seattle Seahawks", 10, "Hines Ward", "Ford Field, Detroit"),
    game("XLI", 2007, "Indianapolis Colts", 29, "Chicago Bears", 17, "Peyton Manning", "Dolphin Stadium, Miami"),
    game("XLII", 2008, "New York Giants", 17, "New England Patriots", 14, "Eli Manning", "Univ. of Phoenix Stadium"),
    game("XLIII", 2009, "Pittsburgh Steelers", 27, "Arizona Cardinals", 23, "Santonio Holmes", "Raymond James Stadium"),
    game("XLIV", 2010, "New Orleans Saints", 31, "Indianapolis Colts", 17, "Drew Brees", "Sun Life Stadium, Miami"),
    game("XLV", 2011, "Green Bay Packers", 31, "Pittsburgh Steelers", 25, "Aaron Rodgers", "Cowboys Stadium, Arlington"),
    game("XLVI", 2012, "New York Giants", 21, "New England Patriots", 17, "Eli Manning", "Lucas Oil Stadium, Indy"),
    game("XLVII", 2013, "Baltimore Ravens", 34, "San Francisco 49ers", 31, "Joe Flacco", "Superdome, New Orleans"),
    game("XLVIII", 2014, "Seattle Seahawks", 43, "Denver Broncos", 8, "Malcolm Smith", "MetLife Stadium, NJ"),
    game("XLIX", 2015, "New England Patriots", 28, "Seattle Seahawks", 24, "Tom Brady", "Univ. of Phoenix Stadium"),
    game("50", 2016, "Denver Broncos", 24, "Carolina Panthers", 10, "Von Miller", "Levi's Stadium, Santa Clara"),
    game("LI", 2017, "New England Patriots", 34, "Atlanta Falcons", 28, "Tom Brady", "NRG Stadium, Houston"),
    game("LII", 2018, "Philadelphia Eagles", 41, "New England Patriots", 33, "Nick Foles", "U.S. Bank Stadium, Mpls"),
    game("LIII", 2019, "New England Patriots", 13, "Los Angeles Rams", 3, "Julian Edelman", "Mercedes-Benz Stadium"),
    game("LIV", 2020, "Kansas City Chiefs", 31, "San Francisco 49ers", 20, "Patrick Mahomes", "Hard Rock Stadium, Miami"),
    game("LV", 2021, "Tampa Bay Buccaneers", 31, "Kansas City Chiefs", 9, "Tom Brady", "Raymond James Stadium"),
    game("LVI", 2022, "Los Angeles Rams", 23, "Cincinnati Bengals", 20, "Cooper Kupp", "SoFi Stadium, Inglewood"),
    game("LVII", 2023, "Kansas City Chiefs", 38, "Philadelphia Eagles", 35, "Patrick Mahomes", "State Farm Stadium, AZ"),
    game("LVIII", 2024, "Kansas City Chiefs", 25, "San Francisco 49ers", 22, "Patrick Mahomes", "Allegiant Stadium, LV"),
    game("LIX", 2025, "Philadelphia Eagles", 40, "Kansas City Chiefs", 22, "Jalen Hurts", "Caesars Superdome, NO"),
];

/// Notable halftime shows, in chronological order
pub const HALFTIME_SHOWS: &[HalftimeRecord] = &[
    show("I", 1967, "Univ. of Arizona & Grambling State bands", "Marching Band"),
    show("II", 1968, "Grambling State University band", "Marching Band"),
    show("III", 1969, "Florida A&M University band", "Marching Band"),
    show("X", 1976, "Up with People", "Performance Group"),
    show("XX", 1986, "Up with People", "Performance Group"),
    show("XXVII", 1993, "Michael Jackson", "Pop"),
    show("XXIX", 1995, "Patti LaBelle, Tony Bennett, Arturo Sandoval", "Pop / Jazz"),
    show("XXX", 1996, "Diana Ross", "Pop / R&B"),
    show("XXXIII", 1999, "Stevie Wonder, Gloria Estefan", "Pop / R&B"),
    show("XXXIV", 2000, "Phil Collins, Christina Aguilera, Toni Braxton", "Pop / Rock"),
    show("XXXV", 2001, "Aerosmith, *NSYNC, Britney Spears, Mary J. Blige", "Pop / Rock"),
    show("XXXVI", 2002, "U2", "Rock"),
    show("XXXVII", 2003, "Shania Twain, No Doubt, Sting", "Pop / Rock"),
    show("XXXVIII", 2004, "Janet Jackson, Justin Timberlake, P. Diddy", "Pop / R&B"),
    show("XXXIX", 2005, "Paul McCartney", "Rock"),
    show("XL", 2006, "The Rolling Stones", "Rock"),
    show("XLI", 2007, "Prince", "Pop / Rock"),
    show("XLII", 2008, "Tom Petty and the Heartbreakers", "Rock"),
    show("XLIII", 2009, "Bruce Springsteen & The E Street Band", "Rock"),
    show("XLIV", 2010, "The Who", "Rock"),
    show("XLV", 2011, "The Black Eyed Peas ft. Usher, Slash", "Pop / Hip-Hop"),
    show("XLVI", 2012, "Madonna ft. LMFAO, Nicki Minaj, Cee Lo Green", "Pop"),
    show("XLVII", 2013, "Beyonce ft. Destiny's Child", "Pop / R&B"),
    show("XLVIII", 2014, "Bruno Mars ft. Red Hot Chili Peppers", "Pop / Rock"),
    show("XLIX", 2015, "Katy Perry ft. Lenny Kravitz, Missy Elliott", "Pop"),
    show("50", 2016, "Coldplay ft. Beyonce, Bruno Mars", "Pop / Rock"),
    show("LI", 2017, "Lady Gaga", "Pop"),
    show("LII", 2018, "Justin Timberlake", "Pop / R&B"),
    show("LIII", 2019, "Maroon 5 ft. Travis Scott, Big Boi", "Pop / Hip-Hop"),
    show("LIV", 2020, "Jennifer Lopez & Shakira", "Pop / Latin"),
    show("LV", 2021, "The Weeknd", "Pop / R&B"),
    show("LVI", 2022, "Dr. Dre, Snoop Dogg, Eminem, Kendrick Lamar", "Hip-Hop / R&B"),
    show("LVII", 2023, "Rihanna", "Pop / R&B"),
    show("LVIII", 2024, "Usher", "R&B / Pop"),
    show("LIX", 2025, "Kendrick Lamar ft. SZA", "Hip-Hop / R&B"),
];

/// Economic footprint of Super Bowl LIX
pub const ECONOMIC_FACTS: &[EconomicFact] = &[
    fact("Total Economic Output", "$1.25 Billion", "Impact on New Orleans metro"),
    fact("Consumer Spending", "$18.6 Billion", "Food, merch, parties, travel"),
    fact("30-Second Ad Cost", "$8.0 Million", "New record — up from $7M"),
    fact("Fox Ad Revenue", "$600+ Million", "Total telecast ad revenue"),
    fact("Worker Earnings", "$395 Million", "Event-related industries"),
    fact("Jobs Created", "9,787", "Temp and permanent positions"),
    fact("US TV Viewership", "127.7 Million", "New all-time SB record"),
    fact("Peak Viewership", "137.7 Million", "8:00-8:15 PM ET, Q2"),
    fact("Halftime Viewership", "133.5 Million", "Kendrick Lamar performance"),
    fact("Hotel Occupancy", "95%+", "New Orleans metro during SB week"),
    fact("Avg Ticket Price", "$9,800+", "Secondary market average"),
    fact("Cheapest Ticket", "$4,500+", "Upper deck / standing room"),
    fact("Host City Revenue", "$500+ Million", "Direct spend in New Orleans"),
    fact("Wings Consumed", "1.45 Billion", "On Super Bowl Sunday"),
    fact("Pizzas Ordered", "12.5 Million", "Deliveries on game day"),
    fact("Avocados Consumed", "120+ Million lbs", "For guacamole nationwide"),
];
/// Cover page headline numbers
pub const COVER_KPIS: &[Kpi] = &[
    Kpi {
        value: "59",
        label: "GAMES PLAYED",
    },
    Kpi {
        value: "23",
        label: "UNIQUE CHAMPIONS",
    },
    Kpi {
        value: "127.7M",
        label: "PEAK TV VIEWERS",
    },
];

/// Economic Impact headline numbers
pub const ECONOMY_KPIS: &[Kpi] = &[
    Kpi {
        value: "$1.25B",
        label: "TOTAL ECONOMIC OUTPUT",
    },
    Kpi {
        value: "$18.6B",
        label: "CONSUMER SPENDING",
    },
    Kpi {
        value: "127.7M",
        label: "RECORD TV VIEWERS",
    },
    Kpi {
        value: "$8.0M",
        label: "30-SEC AD COST",
    },
];

/// Game story bullets for the spotlight sheet
pub const SPOTLIGHT_HIGHLIGHTS: &[&str] = &[
    "Eagles scored the first 34 points, building a dominant 34-0 lead",
    "Jalen Hurts set the Super Bowl record for rushing yards by a QB (72 yds)",
    "Saquon Barkley dominated with 167 rushing yards and 2 touchdowns",
    "Philadelphia's defense shut down Patrick Mahomes in the first half",
    "Eagles denied the Chiefs an unprecedented Super Bowl three-peat",
    "Travis Kelce held to just 39 receiving yards by Eagles secondary",
    "Kendrick Lamar & SZA delivered a spectacular halftime performance",
    "127.7 million US viewers \u{2014} a new Super Bowl viewership record",
];

/// Scoring by quarter for the spotlight game, winner first
pub const SPOTLIGHT_LINE_SCORE: [QuarterLine; 2] = [
    QuarterLine {
        team: "EAGLES",
        quarters: [7, 20, 7, 6],
        total: 40,
        color: EAGLES_GREEN,
    },
    QuarterLine {
        team: "CHIEFS",
        quarters: [0, 0, 6, 16],
        total: 22,
        color: CHIEFS_RED,
    },
];

pub const SPOTLIGHT_MVP_LINE: &str =
    "MVP: JALEN HURTS  |  3 TDs (2 Pass, 1 Rush)  |  72 Rush Yds (QB Record)";
pub const SPOTLIGHT_LOCATION: &str = "Caesars Superdome  |  New Orleans, Louisiana";

/// Kickoff date of the spotlight game
pub fn spotlight_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 9).unwrap_or_default()
}

/// The most recent game, highlighted throughout the report
pub fn latest_game() -> &'static GameRecord {
    &SUPER_BOWLS[SUPER_BOWLS.len() - 1]
}

/// First and last year covered by the game table
pub fn year_span() -> (u16, u16) {
    (SUPER_BOWLS[0].year, latest_game().year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(SUPER_BOWLS.len(), 59);
        assert_eq!(HALFTIME_SHOWS.len(), 35);
        assert_eq!(ECONOMIC_FACTS.len(), 16);
    }

    #[test]
    fn test_games_are_chronological() {
        assert!(SUPER_BOWLS.windows(2).all(|w| w[0].year < w[1].year));
        assert_eq!(year_span(), (1967, 2025));
    }

    #[test]
    fn test_latest_game_matches_line_score() {
        let game = latest_game();
        assert_eq!(game.id, "LIX");
        assert_eq!(game.winner_score, SPOTLIGHT_LINE_SCORE[0].total);
        assert_eq!(game.loser_score, SPOTLIGHT_LINE_SCORE[1].total);
        for line in &SPOTLIGHT_LINE_SCORE {
            let sum: u8 = line.quarters.iter().sum();
            assert_eq!(sum, line.total, "{} quarters", line.team);
        }
    }

    #[test]
    fn test_spotlight_date() {
        assert_eq!(spotlight_date().format("%b %-d, %Y").to_string(), "Feb 9, 2025");
    }
}
