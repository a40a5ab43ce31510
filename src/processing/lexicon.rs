//! Fixed English word lists used by normalization and vectorization

use crate::processing::skill_extractor::{SOFT_SKILLS, TECH_SKILLS};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Stopwords dropped by the normalizer (NLTK English list)
pub static NORMALIZER_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
        "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
        "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
        "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
        "which", "who", "whom", "this", "that", "that'll", "these", "those", "am", "is",
        "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
        "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
        "against", "between", "into", "through", "during", "before", "after", "above",
        "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
        "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
        "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
        "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
        "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
        "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
        "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
        "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
        "wouldn't",
    ]
    .into_iter()
    .collect()
});

/// Stopwords excluded when building the TF-IDF vocabulary (scikit-learn English list)
pub static VECTORIZER_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "across", "after", "afterwards", "again", "against",
        "all", "almost", "alone", "along", "already", "also", "although", "always",
        "am", "among", "amongst", "amoungst", "amount", "an", "and", "another", "any",
        "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around", "as",
        "at", "back", "be", "became", "because", "become", "becomes", "becoming",
        "been", "before", "beforehand", "behind", "being", "below", "beside",
        "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call",
        "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de",
        "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
        "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc",
        "even", "ever", "every", "everyone", "everything", "everywhere", "except",
        "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five", "for",
        "former", "formerly", "forty", "found", "four", "from", "front", "full",
        "further", "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence",
        "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself",
        "him", "himself", "his", "how", "however", "hundred", "i", "ie", "if", "in",
        "inc", "indeed", "interest", "into", "is", "it", "its", "itself", "keep",
        "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
        "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most",
        "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
        "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone",
        "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once",
        "one", "only", "onto", "or", "other", "others", "otherwise", "our", "ours",
        "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put",
        "rather", "re", "same", "see", "seem", "seemed", "seeming", "seems", "serious",
        "several", "she", "should", "show", "side", "since", "sincere", "six",
        "sixty", "so", "some", "somehow", "someone", "something", "sometime",
        "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
        "that", "the", "their", "them", "themselves", "then", "thence", "there",
        "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they",
        "thick", "thin", "third", "this", "those", "though", "three", "through",
        "throughout", "thru", "thus", "to", "together", "too", "top", "toward",
        "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
        "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
        "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
        "whereupon", "wherever", "whether", "which", "while", "whither", "who",
        "whoever", "whole", "whom", "whose", "why", "will", "with", "within",
        "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// Irregular noun forms mapped straight to their lemma
pub static IRREGULAR_NOUNS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("chairmen", "chairman"),
        ("salesmen", "salesman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("analyses", "analysis"),
        ("diagnoses", "diagnosis"),
        ("hypotheses", "hypothesis"),
        ("theses", "thesis"),
        ("crises", "crisis"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("appendices", "appendix"),
        ("vertices", "vertex"),
        ("curricula", "curriculum"),
        ("syllabi", "syllabus"),
        ("alumni", "alumnus"),
        ("stimuli", "stimulus"),
        ("media", "medium"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("caches", "cache"),
        ("niches", "niche"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("quizzes", "quiz"),
        ("headaches", "headache"),
        ("backaches", "backache"),
        ("toothaches", "toothache"),
        ("earaches", "earache"),
        ("heartaches", "heartache"),
        ("avalanches", "avalanche"),
        ("moustaches", "moustache"),
        ("mustaches", "mustache"),
        ("calories", "calorie"),
        ("species", "species"),
        ("series", "series"),
    ]
    .into_iter()
    .collect()
});

/// Words ending in `s` that are already their own lemma. Also holds every
/// vectorizer stopword and every single word of the built-in skill vocabulary.
pub static INVARIANT_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let vocabulary_words = TECH_SKILLS
        .iter()
        .chain(SOFT_SKILLS.iter())
        .copied()
        .flat_map(str::split_whitespace)
        .filter(|word| word.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));

    [
        "aws", "ios", "macos", "js", "nodejs", "vuejs", "reactjs", "sas", "kubernetes",
        "pandas", "jenkins", "keras", "devops", "express", "postgres", "redis", "nosql",
        "ms", "gis", "news", "mathematics", "physics", "economics", "electronics",
        "ethics", "logistics", "athletics", "aerobics", "gymnastics", "politics",
        "linguistics", "analytics", "statistics", "bias", "canvas", "atlas", "alias",
        "chaos", "lens", "gas", "yes", "always", "perhaps", "whereas", "thus", "plus",
        "bonus", "campus", "census", "virus", "status", "focus", "corpus", "consensus",
        "syllabus", "apparatus", "basis", "analysis", "thesis", "axis", "crisis",
        "diagnosis", "emphasis", "hypothesis", "synopsis", "tennis", "dos", "cs", "hrs",
    ]
    .into_iter()
    .chain(VECTORIZER_STOP_WORDS.iter().copied())
    .chain(vocabulary_words)
    .collect()
});
