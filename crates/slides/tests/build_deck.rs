use deck_pptx::PptxReader;
use deck_slides::DeckBuilder;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_full_deck_round_trip() {
    init_logging();

    let builder = DeckBuilder::new();
    let deck = builder.build();
    assert_eq!(deck.presentation.slide_count(), builder.slide_count());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MyWelly_Presentation.pptx");
    deck.presentation.save(&path).unwrap();

    let outline = PptxReader::new().open(&path).unwrap();
    assert_eq!(outline.len(), 41);

    assert!(outline[0].contains("MyWelly"));
    assert!(outline[0].contains("Software Engineering Project\nNovember 2025"));

    assert!(outline[1].contains("Problem Statement"));
    assert!(outline[1].contains("The Healthcare Challenge"));

    // Nested lines lose their marker, headers keep their colon.
    assert!(outline[4].contains("Feasibility Study:"));
    assert!(outline[4].contains("Technical: Spring Boot, Java 17, H2 Database"));
    assert!(!outline[4].contains("  • Technical"));

    // Code keeps its indentation.
    assert!(outline[12].contains("User Entity - JPA Model"));
    assert!(outline[12].contains("    @Id\n    @GeneratedValue(strategy = GenerationType.IDENTITY)"));

    assert!(outline[40].contains("Thank You!"));
    assert!(outline[40].contains("Questions?"));
}

#[test]
fn test_deck_slides_are_in_authored_order() {
    let deck = DeckBuilder::new().build();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");
    deck.presentation.save(&path).unwrap();

    let outline = PptxReader::new().open(&path).unwrap();
    let titles = [
        (3, "Waterfall Model - SDLC"),
        (13, "Spring Security Configuration"),
        (18, "Scheduled Tasks - Automation"),
        (19, "Testing Strategy"),
        (39, "Project Summary"),
    ];
    for (index, title) in titles {
        assert!(outline[index].contains(title), "slide {} lacks {:?}", index + 1, title);
        assert_eq!(outline[index].number, index + 1);
    }
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let deck = DeckBuilder::new().build();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("deck.pptx");
    assert!(deck.presentation.save(&path).is_err());
}
