//! Built-in roster of guessable capital cities.

/// Capital-city names accepted as guesses, in suggestion order.
///
/// Entries are already lowercase. The list mirrors the roster served by the
/// weather worker; `CandidateIndex::new` drops the one duplicate entry.
pub const CAPITALS: &[&str] = &[
    "kabul", "algiers", "buenos aires", "canberra",
    "vienna", "baku", "nassau", "manama",
    "dhaka", "bridgetown", "minsk", "brussels",
    "belmopan", "sarajevo", "brasilia", "sofia",
    "ouagadougou", "bujumbura", "ottawa", "praia",
    "george town", "bangui", "santiago", "beijing",
    "brazzaville", "san jose", "yamoussoukro", "zagreb",
    "havana", "nicosia", "prague", "kinshasa",
    "copenhagen", "djibouti", "roseau", "santo domingo",
    "dili", "quito", "cairo", "san salvador",
    "malabo", "asmara", "tallinn", "addis ababa",
    "stanley", "torshavn", "suva", "helsinki",
    "paris", "cayenne", "papeete", "libreville",
    "banjul", "berlin", "accra", "athens",
    "nuuk", "guatemala", "st. peter port", "bissau",
    "georgetown", "budapest", "reykjavik", "new delhi",
    "jakarta", "tehran", "baghdad", "dublin",
    "rome", "kingston", "amman", "astana",
    "nairobi", "tarawa", "kuwait", "bishkek",
    "vientiane", "riga", "beirut", "maseru",
    "monrovia", "tripoli", "vaduz", "vilnius",
    "luxembourg", "antananarivo", "kuala lumpur", "male",
    "bamako", "valletta", "mexico", "palikir",
    "maputo", "yangon", "windhoek", "kathmandu",
    "amsterdam", "willemstad", "noumea", "wellington",
    "managua", "niamey", "abuja", "kingston",
    "pyongyang", "saipan", "oslo", "masqat",
    "islamabad", "panama", "asuncion", "lima",
    "manila", "warsaw", "lisbon", "san juan",
    "doha", "seoul", "bucuresti", "moskva",
    "kigali", "basseterre", "castries", "saint-pierre",
    "kingstown", "apia", "san marino", "sao tome",
    "riyadh", "dakar", "bratislava", "ljubljana",
    "honiara", "mogadishu", "madrid", "khartoum",
    "paramaribo", "mbabane", "stockholm", "bern",
    "damascus", "dushanbe", "bangkok", "lome",
    "tunis", "ankara", "ashgabat", "funafuti",
    "kampala", "kiev", "abu dhabi", "london",
    "dodoma", "washington dc", "charlotte amalie", "montevideo",
    "tashkent", "port-vila", "caracas", "hanoi",
    "belgrade", "lusaka",
];
