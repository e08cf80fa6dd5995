//! Closed-class and gazetteer word lists for tagging and entity
//! recognition.

pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each",
    "some", "any", "no", "another", "all", "both", "either", "neither",
];

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself",
    "he", "him", "his", "himself", "she", "her", "hers", "herself", "it",
    "its", "itself", "we", "us", "our", "ours", "ourselves", "they", "them",
    "their", "theirs", "themselves", "who", "whom", "whose", "what", "which",
    "someone", "somebody", "something", "anyone", "anybody", "anything",
    "everyone", "everybody", "everything", "nobody", "nothing",
];

pub(crate) const ADPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among",
    "around", "at", "before", "behind", "below", "beneath", "beside",
    "between", "beyond", "by", "down", "during", "except", "for", "from",
    "in", "inside", "into", "near", "of", "off", "on", "onto", "out",
    "outside", "over", "past", "through", "throughout", "to", "toward",
    "towards", "under", "until", "up", "upon", "via", "with", "within",
    "without",
];

pub(crate) const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "plus"];

pub(crate) const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "if", "unless", "since", "while",
    "whereas", "whether", "once", "than", "so",
];

pub(crate) const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "do", "does", "did", "will", "would", "shall", "should", "can",
    "could", "may", "might", "must", "'s", "'re", "'m", "'ve", "'ll", "'d",
];

pub(crate) const PARTICLES: &[&str] = &["not", "n't", "to"];

pub(crate) const ADVERBS: &[&str] = &[
    "also", "always", "again", "almost", "already", "even", "ever", "here",
    "how", "just", "maybe", "much", "never", "now", "often", "only", "quite",
    "rather", "really", "seldom", "sometimes", "soon", "still",
    "then", "there", "too", "very", "well", "when", "where", "why", "yet",
];

pub(crate) const INTERJECTIONS: &[&str] = &[
    "hello", "hi", "hey", "oh", "ah", "wow", "yes", "yeah", "ok", "okay",
    "oops", "ouch", "please", "thanks", "uh", "um", "yay",
];

pub(crate) const COMMON_VERBS: &[&str] = &[
    "ask", "become", "begin", "bring", "build", "buy", "call", "change",
    "come", "create", "feel", "find", "get", "give", "go", "hate", "hear",
    "help", "hold", "keep", "know", "learn", "leave", "let", "like", "live",
    "look", "love", "make", "mean", "meet", "move", "need", "open", "pay",
    "play", "put", "read", "run", "say", "see", "seem", "show", "sit",
    "speak", "stand", "start", "stop", "take", "talk", "tell", "think",
    "try", "turn", "understand", "use", "wait", "want", "watch", "work",
    "write", "said", "went", "came", "took", "made", "got", "saw", "knew",
    "thought", "told", "felt", "left", "gave", "found", "became", "began",
    "kept", "wrote", "ran", "met", "paid", "sat", "stood", "spoke",
];

pub(crate) const COMMON_ADJECTIVES: &[&str] = &[
    "big", "small", "large", "little", "long", "short", "high", "low",
    "old", "new", "young", "good", "bad", "great", "best", "better", "worse",
    "worst", "first", "last", "next", "early", "late", "important", "happy",
    "sad", "nice", "fine", "hard", "easy", "quick", "slow", "red", "blue",
    "green", "black", "white", "right", "wrong", "true", "false", "real",
    "full", "free", "sure", "whole", "strong", "weak", "clear", "hot",
    "cold", "awesome", "amazing", "terrible", "horrible", "wonderful",
    "beautiful", "ugly", "perfect", "fantastic", "excellent", "brilliant",
    "lovely", "pretty", "funny", "boring", "interesting", "quiet", "loud",
];

pub(crate) const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "miss", "dr", "prof", "sir", "madam", "lord", "lady",
];

pub(crate) const FIRST_NAMES: &[&str] = &[
    "alice", "anna", "bob", "carol", "charles", "chris", "daniel", "david",
    "elizabeth", "emily", "emma", "frank", "george", "grace", "henry",
    "jack", "james", "jane", "jennifer", "john", "joseph", "julia", "kate",
    "laura", "linda", "maria", "mark", "mary", "michael", "olivia", "paul",
    "peter", "richard", "robert", "sarah", "steve", "susan", "thomas", "tom",
    "william",
];

pub(crate) const PLACES: &[&str] = &[
    "africa", "america", "amsterdam", "asia", "australia", "berlin",
    "boston", "brazil", "california", "canada", "chicago", "china", "europe",
    "france", "germany", "india", "ireland", "italy", "japan", "london",
    "mexico", "moscow", "paris", "russia", "seattle", "spain", "sydney",
    "texas", "tokyo", "toronto", "uk", "usa", "york",
];

pub(crate) const ORG_SUFFIXES: &[&str] = &[
    "inc", "corp", "corporation", "co", "company", "ltd", "llc", "plc",
    "gmbh", "group", "university", "institute", "agency", "bank",
    "foundation", "association",
];

pub(crate) const ORGANIZATIONS: &[&str] = &[
    "amazon", "apple", "google", "microsoft", "netflix", "nasa", "fbi",
    "un", "eu", "ibm", "intel", "meta", "openai", "tesla", "youtube",
];

pub(crate) const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july",
    "august", "september", "october", "november", "december",
];

pub(crate) const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
    "sunday", "today", "yesterday", "tomorrow",
];

/// Spelled-out numbers tagged `NUM`.
pub(crate) const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    "nine", "ten", "eleven", "twelve", "twenty", "hundred", "thousand",
    "million", "billion",
];

pub(crate) fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}
