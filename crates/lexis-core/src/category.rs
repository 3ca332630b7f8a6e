/// Topic categories every level must carry
pub const CATEGORIES: [&str; 15] = [
    "Politics and society",
    "Science and technology",
    "Sport",
    "Natural world",
    "Time and space",
    "Travelling",
    "Work and business",
    "Animals",
    "Appearance",
    "Culture",
    "Food and drink",
    "Health",
    "Homes and buildings",
    "Leisure",
    "People",
];
