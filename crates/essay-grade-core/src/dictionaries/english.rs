//! Built-in English word lists for spelling checks.
//!
//! [`WORDS`] holds the most frequent words in descending order of frequency;
//! a word's position is its rank, and lower ranks win when two corrections
//! tie. [`WORD_LIST`] is the full vocabulary (about 95k inflected forms,
//! common words first) and ranks after [`WORDS`]. British spellings common
//! in essays sit alongside the American ones.

/// Full English vocabulary in word-list format: one lowercase word per line,
/// `#` comment lines.
pub static WORD_LIST: &str = include_str!("../../data/english_words.txt");

/// Frequency-ranked English words, lowercase.
pub static WORDS: &[&str] = &[
    // Function words and contraction fragments
    "the", "of", "and", "to", "a", "in", "is", "it", "you", "that", "he", "was", "for", "on",
    "are", "with", "as", "i", "his", "they", "be", "at", "one", "have", "this", "from", "or",
    "had", "by", "not", "but", "what", "some", "we", "can", "out", "other", "were", "all",
    "there", "when", "up", "use", "your", "how", "said", "an", "each", "she", "which", "do",
    "their", "time", "if", "will", "way", "about", "many", "then", "them", "would", "write",
    "like", "so", "these", "her", "long", "make", "thing", "see", "him", "two", "has", "look",
    "more", "day", "could", "go", "come", "did", "number", "no", "most", "people", "my",
    "over", "know", "than", "call", "first", "who", "may", "down", "side", "been", "now",
    "find", "any", "new", "work", "part", "take", "get", "place", "made", "live", "where",
    "after", "back", "little", "only", "round", "man", "year", "came", "show", "every",
    "good", "me", "give", "our", "under", "name", "very", "through", "just", "form", "much",
    "great", "think", "say", "help", "low", "line", "before", "turn", "cause", "same", "mean",
    "differ", "move", "right", "boy", "old", "too", "does", "tell", "sentence", "set",
    "three", "want", "air", "well", "also", "play", "small", "end", "put", "home", "read",
    "hand", "port", "large", "spell", "add", "even", "land", "here", "must", "big", "high",
    "such", "follow", "act", "why", "ask", "men", "change", "went", "light", "kind", "off",
    "need", "house", "picture", "try", "us", "again", "animal", "point", "mother", "world",
    "near", "build", "self", "earth", "father", "head", "stand", "own", "page", "should",
    "country", "found", "answer", "school", "grow", "study", "still", "learn", "plant",
    "cover", "food", "sun", "four", "thought", "let", "keep", "eye", "never", "last", "door",
    "between", "city", "tree", "cross", "since", "hard", "start", "might", "story", "saw",
    "far", "sea", "draw", "left", "late", "run", "while", "press", "close", "night", "real",
    "life", "few", "stop", "open", "seem", "together", "next", "white", "children", "begin",
    "got", "walk", "example", "ease", "paper", "often", "always", "music", "those", "both",
    "mark", "book", "letter", "until", "mile", "river", "car", "feet", "care", "second",
    "group", "carry", "took", "rain", "eat", "room", "friend", "began", "idea", "fish",
    "mountain", "north", "once", "base", "hear", "horse", "cut", "sure", "watch", "color",
    "colour", "face", "wood", "main", "enough", "plain", "girl", "usual", "young", "ready",
    "above", "ever", "red", "list", "though", "feel", "talk", "bird", "soon", "body", "dog",
    "family", "direct", "pose", "leave", "song", "measure", "state", "product", "black",
    "short", "numeral", "class", "wind", "question", "happen", "complete", "ship", "area",
    "half", "rock", "order", "fire", "south", "problem", "piece", "told", "knew", "pass",
    "farm", "top", "whole", "king", "size", "heard", "best", "hour", "better", "true",
    "during", "hundred", "am", "remember", "step", "early", "hold", "west", "ground",
    "interest", "reach", "fast", "five", "sing", "listen", "six", "table", "travel", "less",
    "morning", "ten", "simple", "several", "vowel", "toward", "towards", "war", "lay",
    "against", "pattern", "slow", "center", "centre", "love", "person", "money", "serve",
    "appear", "road", "map", "science", "rule", "govern", "pull", "cold", "notice", "voice",
    "fall", "power", "town", "fine", "certain", "fly", "unit", "lead", "cry", "dark",
    "machine", "note", "wait", "plan", "figure", "star", "box", "noun", "field", "rest",
    "correct", "able", "pound", "done", "beauty", "drive", "stood", "contain", "front",
    "teach", "week", "final", "gave", "green", "oh", "quick", "develop", "sleep", "warm",
    "free", "minute", "strong", "special", "mind", "behind", "clear", "tail", "produce",
    "fact", "street", "inch", "lot", "nothing", "course", "stay", "wheel", "full", "force",
    "blue", "object", "decide", "surface", "deep", "moon", "island", "foot", "yet", "busy",
    "test", "record", "boat", "common", "gold", "possible", "plane", "age", "dry", "wonder",
    "laugh", "thousand", "ago", "ran", "check", "game", "shape", "yes", "hot", "miss",
    "brought", "heat", "snow", "bed", "bring", "sit", "perhaps", "fill", "east", "weight",
    "language", "among", "s", "t", "d", "ll", "m", "re", "ve", "o", "n",
    // Core vocabulary
    "government", "system", "society", "public", "national", "economic", "economy", "policy",
    "social", "political", "development", "market", "growth", "trade", "country", "nation",
    "international", "global", "local", "community", "report", "research", "evidence",
    "level", "increase", "decrease", "rate", "value", "cost", "price", "income", "wealth",
    "poverty", "resource", "industry", "business", "company", "worker", "labour", "labor",
    "employment", "job", "service", "sector", "investment", "bank", "finance", "financial",
    "tax", "budget", "debt", "deficit", "revenue", "spending", "expenditure", "capital",
    "demand", "supply", "consumer", "production", "export", "import", "currency", "interest",
    "inflation", "unemployment", "fiscal", "monetary", "taxation", "banking", "reform",
    "gdp", "sustainable", "stable", "stability", "crisis", "recession", "recovery",
    "agriculture", "agricultural", "rural", "urban", "infrastructure", "manufacturing",
    "household", "private", "subsidy", "welfare", "inequality", "equality", "equal",
    "opportunity", "education", "health", "healthcare", "hospital", "population",
    "environment", "environmental", "climate", "pollution", "energy", "renewable",
    "sustainability", "biodiversity", "conservation", "ecosystem", "greenhouse", "emission",
    "forestry", "forest", "water", "management", "carbon", "fuel", "fossil", "solar",
    "species", "habitat", "waste", "recycle", "temperature", "warming", "nature", "natural",
    "philosophy", "ethics", "ethical", "morality", "moral", "epistemology", "metaphysics",
    "logic", "logical", "argument", "reason", "duty", "virtue", "justice", "human",
    "existentialism", "truth", "knowledge", "belief", "freedom", "liberty", "meaning",
    "existence", "value", "principle", "theory", "conscience", "happiness", "good", "evil",
    "technology", "innovation", "experiment", "data", "hypothesis", "discovery", "physics",
    "chemistry", "biology", "scientific", "scientist", "method", "laboratory", "analysis",
    "observation", "medicine", "engineering", "computer", "digital", "internet",
    "constitution", "governance", "democracy", "democratic", "rights", "right", "law",
    "parliament", "judiciary", "federal", "election", "representation", "fundamental",
    "citizen", "court", "legislature", "executive", "minister", "president", "vote",
    "party", "leader", "authority", "institution", "administration", "accountability",
    "history", "historical", "heritage", "civilisation", "civilization", "ancient",
    "medieval", "modern", "independence", "movement", "colonial", "colonialism", "battle",
    "culture", "cultural", "archaeological", "source", "empire", "dynasty", "revolution",
    "century", "era", "period", "struggle", "tradition", "traditional",
    "foreign", "diplomacy", "diplomatic", "geopolitics", "geopolitical", "strategic",
    "relation", "relations", "alliance", "treaty", "organisation", "organization", "un",
    "security", "cooperation", "conflict", "peace", "border", "sovereignty", "region",
    "regional", "neighbour", "neighbor", "partner", "partnership", "summit", "agreement",
    // Academic and essay vocabulary
    "essay", "introduction", "conclusion", "paragraph", "topic", "issue", "aspect",
    "factor", "impact", "effect", "role", "approach", "process", "structure", "function",
    "however", "therefore", "thus", "moreover", "furthermore", "nevertheless", "hence",
    "consequently", "although", "despite", "whereas", "because", "unless", "whether",
    "within", "without", "across", "along", "around", "beyond", "upon", "into", "onto",
    "against", "throughout", "via", "per", "indeed", "rather", "quite", "almost", "already",
    "instead", "otherwise", "similarly", "likewise", "additionally", "meanwhile", "finally",
    "overall", "particular", "specific", "general", "various", "major", "minor", "key",
    "significant", "important", "essential", "critical", "crucial", "necessary", "relevant",
    "effective", "efficient", "positive", "negative", "direct", "indirect", "long", "term",
    "current", "future", "past", "present", "recent", "potential", "possible", "likely",
    "clear", "strong", "weak", "wide", "broad", "narrow", "complex", "simple", "difficult",
    "easy", "able", "aware", "responsible", "individual", "collective", "personal",
    "role", "goal", "aim", "objective", "purpose", "strategy", "framework", "model",
    "concept", "idea", "view", "perspective", "opinion", "position", "claim", "support",
    "challenge", "solution", "benefit", "risk", "threat", "advantage", "disadvantage",
    "result", "outcome", "consequence", "response", "decision", "choice", "action",
    "measure", "step", "stage", "phase", "trend", "pattern", "feature", "quality",
    "quantity", "amount", "share", "percent", "percentage", "majority", "minority",
    "improve", "improvement", "achieve", "achievement", "ensure", "promote", "provide",
    "require", "requirement", "include", "involve", "affect", "influence", "depend",
    "determine", "establish", "maintain", "protect", "protection", "reduce", "reduction",
    "raise", "lower", "expand", "expansion", "encourage", "enable", "create", "creation",
    "consider", "consideration", "discuss", "discussion", "explain", "explanation",
    "describe", "description", "argue", "suggest", "suggestion", "indicate", "show",
    "demonstrate", "prove", "identify", "compare", "comparison", "contrast", "evaluate",
    "evaluation", "assess", "assessment", "examine", "address", "focus", "emphasis",
    "emphasise", "emphasize", "highlight", "recognise", "recognize", "understand",
    "understanding", "believe", "accept", "reject", "allow", "prevent", "limit",
    "control", "regulate", "regulation", "manage", "operate", "implement",
    "implementation", "adopt", "apply", "application", "design", "plan", "organise",
    "organize", "balance", "distribute", "distribution", "allocate", "allocation",
    "invest", "spend", "save", "borrow", "lend", "pay", "earn", "sell", "buy", "produce",
    "consume", "consumption", "compete", "competition", "competitive", "fair", "fairness",
    "open", "closed", "free", "partner", "needs", "sound", "lead", "shape", "rise",
    "fell", "fallen", "rose", "risen", "grew", "grown", "gone", "taken", "given", "written",
    "spoken", "known", "shown", "seen", "been", "being", "became", "become", "chosen",
    "driven", "broken", "held", "kept", "left", "lost", "met", "paid", "sent", "spent",
    "stood", "understood", "won", "fought", "sought", "taught", "bought", "caught",
    "built", "dealt", "felt", "meant", "led", "fed", "laid", "sold", "struck", "wrote",
    "spoke", "chose", "drove", "broke", "began", "begun", "ran", "sat", "thought",
    "children", "women", "woman", "men", "people", "lives", "countries", "policies",
    "economies", "industries", "societies", "studies", "theories", "discoveries",
    "treaties", "allies", "ally", "data", "criteria", "phenomena", "analyses",
    // General vocabulary
    "across", "action", "activity", "actually", "addition", "administration", "adult",
    "affair", "afford", "afraid", "agency", "agent", "agree", "ahead", "allow", "alone",
    "already", "alternative", "amid", "analyse", "analyze", "another", "anyone", "anything",
    "apparent", "appropriate", "approval", "argue", "arise", "arrange", "article", "artist",
    "assume", "attack", "attempt", "attend", "attention", "attitude", "attract", "audience",
    "author", "available", "average", "avoid", "award", "away", "background", "bad", "bar",
    "basic", "basis", "bear", "beat", "beautiful", "behaviour", "behavior", "bill", "billion",
    "bit", "blood", "board", "born", "brain", "break", "brief", "brother", "campaign",
    "cancer", "candidate", "capacity", "card", "career", "case", "catch", "cell", "central",
    "chair", "chance", "character", "charge", "choose", "church", "circumstance", "civil",
    "claim", "coal", "coast", "collect", "college", "commercial", "commission", "commit",
    "commitment", "committee", "communication", "compare", "concern", "condition",
    "conference", "congress", "connect", "connection", "conservative", "constant",
    "construction", "contact", "content", "context", "continue", "contract", "contribute",
    "contribution", "corporate", "council", "count", "couple", "cover", "crime",
    "criminal", "cup", "customer", "daughter", "dead", "deal", "death", "debate",
    "decade", "defence", "defense", "defend", "degree", "deliver", "department", "deny",
    "despite", "detail", "difference", "different", "dinner", "direction", "director",
    "disease", "district", "divide", "doctor", "document", "drop", "drug", "due", "duty",
    "each", "edge", "effort", "either", "else", "employee", "employer", "encounter",
    "enemy", "enjoy", "enter", "entire", "especially", "event", "eventually", "everybody",
    "everyone", "everything", "exactly", "exist", "expect", "experience", "expert",
    "express", "extend", "extent", "extreme", "facility", "fail", "failure", "faith",
    "famous", "far", "fear", "fight", "film", "firm", "floor", "forget", "formal",
    "former", "forward", "foundation", "frequent", "fund", "gain", "garden", "gas",
    "generation", "glass", "gun", "guy", "hair", "hang", "hate", "heart", "heavy", "herself",
    "himself", "hit", "hope", "huge", "identity", "image", "imagine", "indeed", "industrial",
    "information", "inside", "instead", "instance", "institution", "interview", "investigate",
    "item", "itself", "join", "journal", "judge", "kill", "kitchen", "lack", "large", "later",
    "latter", "lawyer", "layer", "lead", "learning", "least", "legal", "less", "likely",
    "link", "literature", "little", "loss", "machine", "magazine", "maintain", "manager",
    "matter", "maybe", "media", "medical", "meeting", "member", "memory", "mention",
    "message", "middle", "military", "million", "mission", "modest", "moment", "month",
    "mouth", "movie", "myself", "nearly", "necessity", "network", "news", "newspaper",
    "nice", "none", "nor", "normal", "nothing", "occur", "offer", "office", "officer",
    "official", "oil", "ok", "operation", "option", "ordinary", "original", "others",
    "outside", "owner", "pain", "painting", "parent", "participant", "partly",
    "pay", "peace", "perform", "performance", "perhaps", "physical", "pick", "player",
    "police", "poor", "popular", "practice", "practise", "prepare", "pressure", "pretty",
    "previous", "primary", "prime", "prison", "probably", "professional", "professor",
    "profit", "program", "programme", "project", "property", "propose", "proposal",
    "prospect", "prosperity", "prosperous", "protest", "psychology", "quality", "quickly",
    "radio", "range", "rather", "reality", "realise", "realize", "really", "receive",
    "recent", "recognition", "reflect", "reform", "regard", "relate", "relationship",
    "religion", "religious", "remain", "remove", "repeat", "represent", "republic",
    "reveal", "rich", "ring", "role", "safe", "safety", "scene", "score", "season", "seat",
    "seek", "sense", "series", "serious", "several", "sex", "share", "shoot", "shop",
    "shoulder", "sign", "significance", "similar", "sing", "single", "sister", "site",
    "situation", "skill", "skin", "soldier", "somebody", "someone", "something",
    "sometimes", "son", "sort", "space", "speak", "speech", "sport", "spring", "staff",
    "standard", "statement", "station", "stock", "strategy", "stress", "student",
    "stuff", "style", "subject", "success", "successful", "suffer", "summer", "sure",
    "system", "task", "teacher", "team", "television", "tend", "tension", "territory",
    "themselves", "therefore", "thing", "third", "throughout", "thus", "tonight",
    "total", "tough", "tourism", "trial", "trouble", "truth", "type", "unity", "union",
    "university", "upon", "usually", "various", "victim", "violence", "visit", "wall",
    "wear", "weapon", "whatever", "whom", "whose", "wife", "win", "wish", "within",
    "worry", "wrong", "yard", "yeah", "yourself", "youth", "zone",
    // Less frequent terms that appear in essays
    "abolish", "absolute", "abstract", "abundant", "academic", "accelerate", "access",
    "accompany", "accomplish", "accord", "account", "accurate", "accuse", "acid",
    "acknowledge", "acquire", "adapt", "adaptation", "adequate", "adjust", "admit",
    "advance", "advocate", "aesthetic", "aftermath", "aggregate", "aid", "alter",
    "ambition", "amend", "amendment", "analyst", "ancestor", "anxiety", "apparatus",
    "arbitrary", "archive", "aristocracy", "arms", "army", "aspiration", "assembly",
    "asset", "assist", "associate", "association", "atmosphere", "atom", "attribute",
    "autonomy", "bacteria", "barrier", "belong", "bias", "bilateral", "bond",
    "boundary", "bureaucracy", "cabinet", "calculate", "capitalism", "category",
    "ceasefire", "census", "chemical", "citizenship", "civic", "clause", "coalition",
    "cognitive", "coherent", "coin", "collapse", "colony", "combat", "combine",
    "commerce", "commodity", "communism", "compensate", "component", "comprehensive",
    "compromise", "conduct", "confederation", "confidence", "conquest", "consensus",
    "consent", "consequence", "considerable", "consist", "consistent", "constitutional",
    "constrain", "constraint", "consult", "contemporary", "continent", "controversy",
    "convention", "coordinate", "core", "corruption", "crisis", "crop", "crown",
    "currency", "cycle", "decline", "dedicate", "deficiency", "define", "definition",
    "deforestation", "delegate", "democratise", "demographic", "density", "deposit",
    "depression", "derive", "desert", "destroy", "destruction", "deter", "deterrence",
    "devastate", "dignity", "dimension", "diminish", "disarmament", "discipline",
    "discrimination", "displace", "dispute", "distinct", "diverse", "diversity",
    "doctrine", "domain", "domestic", "dominant", "dominate", "drought", "dynamic",
    "ecology", "ecological", "efficiency", "electoral", "element", "elite", "embargo",
    "emerge", "emergence", "emergency", "empirical", "empower", "enforce", "enhance",
    "enlightenment", "enormous", "enterprise", "entrepreneur", "equity", "erosion",
    "establishment", "estimate", "ethnic", "evolution", "evolve", "exceed",
    "exchange", "exclusion", "exploit", "exploitation", "extinction", "facilitate",
    "famine", "federalism", "fertile", "fertiliser", "fertilizer", "feudal", "flood",
    "flow", "formation", "fragile", "franchise", "fraud", "frontier", "gender", "gene",
    "genetic", "genocide", "glacier", "globalisation", "globalization", "gravity",
    "guarantee", "guideline", "harm", "harmony", "harvest", "hegemony", "hierarchy",
    "humanitarian", "hydrogen", "ideology", "illustrate", "immigration", "imperial",
    "imperialism", "incentive", "inclusive", "incorporate", "indicator", "indigenous",
    "inevitable", "infer", "inherent", "inherit", "initiative", "injustice", "inquiry",
    "insight", "integrate", "integration", "integrity", "intellectual", "intelligence",
    "interdependence", "interpret", "interpretation", "intervention", "invasion",
    "invention", "irrigation", "isolation", "judicial", "jurisdiction", "justify",
    "kingdom", "legislation", "legislative", "legitimacy", "legitimate", "liability",
    "liberal", "literacy", "livelihood", "lobby", "loan", "macroeconomic", "mandate",
    "manifest", "maritime", "mechanism", "migration", "mineral", "minimum", "maximum",
    "mobilise", "mobilize", "molecule", "monarchy", "monopoly", "multilateral",
    "mutual", "narrative", "negotiate", "negotiation", "neutral", "norm", "nuclear",
    "nutrition", "obligation", "obtain", "oppose", "opposition", "oppression",
    "optimal", "organic", "orthodox", "output", "oversight", "ozone", "paradigm",
    "participate", "participation", "peasant", "perceive", "perception", "persist",
    "phenomenon", "pioneer", "pluralism", "poverty", "pragmatic", "precede",
    "precedent", "predict", "prediction", "preserve", "prevail", "principle",
    "priority", "privatisation", "privatization", "procedure", "productivity",
    "prohibit", "proportion", "prosecute", "protectionism", "province", "provision",
    "qualitative", "quantitative", "radical", "rainfall", "ratify", "ratio", "rational",
    "rationality", "recession", "reconcile", "redistribution", "referendum", "refugee",
    "regime", "reign", "reinforce", "reliance", "reliable", "remedy", "renaissance",
    "representative", "republican", "resilience", "resilient", "resistance", "resolve",
    "resolution", "restore", "restrict", "restriction", "retain", "revenue", "revise",
    "revolt", "rhetoric", "rival", "rivalry", "sanction", "scarcity", "scholar",
    "secular", "secure", "segment", "settlement", "shift", "shortage", "socialism",
    "sovereign", "specialise", "specialize", "speculate", "sphere", "stakeholder",
    "statute", "stimulus", "subsequent", "substantial", "substitute", "succession",
    "suffrage", "summary", "surplus", "surveillance", "sustain", "symbol", "tariff",
    "technique", "technological", "terrorism", "textile", "theme", "tolerance",
    "transform", "transformation", "transition", "transparency", "transparent",
    "transport", "tribe", "tribal", "unemployed", "uniform", "universal", "utilitarian",
    "utility", "vaccine", "validity", "variable", "vary", "vast", "verify", "veto",
    "viable", "vital", "volatile", "vulnerable", "wage", "wildlife", "yield",
];
