/// Questions shown in the FAQ section of the landing page, in display order
pub(crate) const FAQ: &[(&str, &str)] = &[
    (
        "Do I need a ticket for each day?",
        "Yes—single-day tickets are valid only for the date listed. If you want both days, purchase both days or a weekend bundle if available.",
    ),
    (
        "Are tickets refundable or transferable?",
        "All ticket sales are final and non-refundable.",
    ),
    (
        "Is re-entry allowed?",
        "Yes. You’ll receive a wristband at check-in; keep it on for same-day re-entry.",
    ),
    (
        "Is parking free?",
        "Yes—on-site parking is free for attendees.",
    ),
    (
        "Are kids free?",
        "Yes—children under 12 get free entry with a paid adult ticket.",
    ),
    (
        "Can I buy tickets at the door?",
        "Yes, if the show isn’t sold out. We still recommend buying online in advance.",
    ),
    (
        "How do I register for tournaments?",
        "Use the “Register” button on each tournament card/page. Online registration closes when an event sells out or shortly before start time.",
    ),
    (
        "What should I bring to play?",
        "Requirements vary by event. We’ll post per-tournament checklists (deck, sleeves, ID, decklist if required). Check the specific tournament page for details.",
    ),
    (
        "Are casual/learn-to-play tables available?",
        "Likely—open play and learn-to-play tables are planned. Final details will be posted closer to the show.",
    ),
    (
        "What is the prizing structure?",
        "Each tournament page lists prizing (packs, prize wall tickets, invites, etc.). Prizes are distributed after final results are posted.",
    ),
    (
        "How do signings work?",
        "Purchase autograph/photo options on the website (when available), then check the guest’s posted signing windows on site. If a tournament requires a decklist, submit it the morning of the event unless otherwise specified.",
    ),
    (
        "Can I take photos with guests?",
        "Most guests allow photos—ask first and follow staff direction for the queue.",
    ),
    (
        "Will there be buying, selling, and trading on site?",
        "Yes—our vendor hall buys/sells all weekend. Personal trading is welcome in designated areas; unofficial vending is not allowed.",
    ),
    (
        "Is on-site grading available?",
        "TBD. If PSA/CGC or other partners attend, we’ll announce grading/submission details and pricing ahead of the show.",
    ),
    (
        "Where is the event and how do I park?",
        "Travis County Exposition Center. Follow on-site signage to attendee parking.",
    ),
    (
        "Is the venue ADA accessible?",
        "Yes—ramps, accessible restrooms, and seating are available. For assistance, visit the Info Desk or email us ahead of time.",
    ),
    (
        "What is the bag policy?",
        "Bags and card cases are OK and subject to security screening. No outside alcohol, glass, or prohibited items.",
    ),
    (
        "Will there be food available on-site?",
        "Concessions are planned; final vendor list and hours will be posted closer to the event.",
    ),
    (
        "Can I bring food or drinks?",
        "No outside food or beverages are permitted.",
    ),
    (
        "Is there a lost & found?",
        "Yes—visit the Info Desk. TCGFest is not responsible for lost, stolen, or damaged items.",
    ),
    (
        "What is your Code of Conduct?",
        "Be respectful. Harassment, cheating, and dangerous behavior are not tolerated. Violations may result in removal without refund.",
    ),
];
