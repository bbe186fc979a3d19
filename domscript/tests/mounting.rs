use domscript::{builder::Builder, bumpalo::Bump, mount, FileSlot, StringSlot};

#[test]
fn mounting_replaces_prior_slot_content() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let mut slot = StringSlot::new();
    assert_eq!(slot.content(), None);

    let first = b.body("").unwrap().children([b.text("first")]).unwrap();
    mount(&first, &mut slot).unwrap();
    assert_eq!(slot.content(), Some("<body>first</body>"));

    let second = b.body("").unwrap().children([b.text("second")]).unwrap();
    mount(&second, &mut slot).unwrap();
    assert_eq!(slot.content(), Some("<body>second</body>"));
}

#[test]
fn mounted_tree_renders_selector_and_attributes() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let root = b
        .div("#top border-b border-gray-300")
        .unwrap()
        .children([
            b.h1("font-bold text-2xl")
                .unwrap()
                .children([b.text("Title")])
                .unwrap()
                .into(),
            b.img("")
                .unwrap()
                .set("src", "images/sample-1.jpg")
                .set("alt", "Sample Image")
                .build()
                .unwrap()
                .into(),
        ])
        .unwrap();

    let mut slot = StringSlot::new();
    mount(&root, &mut slot).unwrap();
    assert_eq!(
        slot.content(),
        Some(
            "<div id=\"top\" class=\"border-b border-gray-300\">\
             <h1 class=\"font-bold text-2xl\">Title</h1>\
             <img src=\"images/sample-1.jpg\" alt=\"Sample Image\">\
             </div>"
        )
    );
}

#[test]
fn file_slot_writes_and_overwrites_the_file() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let dir = tempfile::tempdir().unwrap();
    let mut slot = FileSlot::new(dir.path().join("pages").join("index.html"));

    let first = b.p("").unwrap().children([b.text("first")]).unwrap();
    mount(&first, &mut slot).unwrap();
    assert_eq!(
        std::fs::read_to_string(slot.path()).unwrap(),
        "<p>first</p>"
    );

    let second = b.p("").unwrap().children([b.text("second")]).unwrap();
    mount(&second, &mut slot).unwrap();
    assert_eq!(
        std::fs::read_to_string(slot.path()).unwrap(),
        "<p>second</p>"
    );
}
