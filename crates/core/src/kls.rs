//! Strategy-disclosure word list from the draft of Kothari, Li and Short (2009).

pub const KLS_WORD_LIST: &[(&str, &[&str])] = &[
    ("market", &["market", "marketplace", "environment", "segment", "sector"]),
    (
        "competition",
        &[
            "market", "marketplace", "environment", "customer", "channel", "value",
            "first-mover", "technology", "alliance", "partnership", "venture",
            "regulation", "litigation",
        ],
    ),
    (
        "industry_structure",
        &[
            "industry", "entrant", "supplier", "buyer", "substitute", "scale", "product",
            "brand", "switching", "capital", "access", "cost", "rivalry", "capacity",
            "concentration", "exit", "barrier", "price", "profit", "quality", "input",
            "volume", "purchase", "integration", "power",
        ],
    ),
    (
        "strategic_intent",
        &[
            "strategy", "strategic", "value", "sales", "revenue", "share", "profit",
            "profitability", "product", "service", "lead", "leader", "quality", "customer",
            "buyer", "growth", "opportunity", "risk", "resource",
        ],
    ),
    (
        "innovation_and_r_d",
        &[
            "research and development", "r&d", "patent", "discovery", "license",
            "licensing", "regulation", "regulatory", "trial", "monitor", "innovate",
            "innovation", "competence",
        ],
    ),
    (
        "mode_of_entry",
        &[
            "entry", "cost", "business", "complementary", "green-field", "venture",
            "investment", "capital", "solution", "price",
        ],
    ),
    (
        "business_model",
        &["model", "best", "lowest", "low", "highest", "high", "supplier", "distribution"],
    ),
    (
        "partnerships",
        &[
            "partner", "alliance", "merger", "acquisition", "joint", "venture",
            "relationship", "equity", "asset",
        ],
    ),
    (
        "leadership",
        &[
            "leader", "leadership", "record", "value", "culture", "responsibility", "goal",
            "objective",
        ],
    ),
    (
        "management_quality",
        &["management", "quality", "best", "proven", "experience", "teamwork"],
    ),
    (
        "governance",
        &[
            "recruitment", "development", "governance", "corporate", "board", "incentive",
            "owner", "ownership", "compensation",
        ],
    ),
    (
        "disclosure",
        &[
            "disclosure", "transparent", "transparency", "information", "audit", "auditing",
            "oversight", "assurance", "regulation", "mandate", "mandated",
        ],
    ),
    (
        "measures",
        &[
            "up", "down", "better", "worse", "recover", "advance", "advancing", "progress",
            "progressing", "expand", "expanding", "improve", "improving", "reduce",
            "reducing", "reduction", "decline", "declining", "retain", "retention", "profit",
            "profitability", "feedback", "scorecard", "growth", "growing", "performance",
            "projected", "projections",
        ],
    ),
    ("customer", &["customer", "satisfaction", "feedback", "trust"]),
    (
        "brand",
        &[
            "brand", "image", "name", "trademark", "recognition", "stretch", "quality",
            "awareness",
        ],
    ),
    (
        "media",
        &[
            "radio", "television", "newspaper", "internet", "promotion", "media spend",
            "announcements", "release", "media budget",
        ],
    ),
    (
        "advertising",
        &[
            "advertising", "ad", "direct", "channel", "advertising", "spend", "ad spend",
            "advertising allocation", "budget", "ad budget",
        ],
    ),
    (
        "corporate_image",
        &[
            "corporate image", "reputation", "integrity", "community", "trust",
            "trusted name", "confidence", "durability", "strength", "character",
        ],
    ),
    (
        "financial_performance",
        &[
            "gross", "net", "return on investment", "return on sales", "return on assets",
            "return on equity", "ROI", "ROA", "ROE", "profit", "earnings", "margin",
            "capital", "debt", "sales", "EBITDA", "ratings", "leverage", "valuation",
            "cost of capital",
        ],
    ),
    (
        "forecasting",
        &["forecast", "forecasting", "cash flow", "prospectus", "quarterly"],
    ),
    ("insider_stock_transactions", &["insider buy", "insider sell"]),
    (
        "regulation",
        &[
            "regulation", "federal", "state", "securities and exchange", "commission",
            "commerce", "legislation", "congress", "law", "legal", "hearings", "enacted",
            "pending", "sec", "medicare", "medicaid", "FDA",
        ],
    ),
    (
        "special_interest_groups",
        &[
            "lobby", "lobbyists", "special", "interest", "expert", "testimony", "industry",
            "watchdog", "consumer rights", "patient rights",
        ],
    ),
];
