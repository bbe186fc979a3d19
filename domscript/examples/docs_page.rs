//! Builds a small documentation page and prints its HTML.

use domscript::{
    builder::Builder, bumpalo::Bump, mount, util::slugify, BuildError, Node, StringSlot,
};

/// A heading with an anchor id derived from its text.
fn heading<'bump>(b: &Builder<'bump>, text: &str) -> Result<Node<'bump>, BuildError> {
    let hash = slugify(b.bump(), text);
    b.h1(&format!(
        "#{hash} text-3xl border-b-2 font-medium py-3 mb-4 border-gray-200"
    ))?
    .children([b.text(text)])
}

fn content<'bump>(b: &Builder<'bump>) -> Result<Node<'bump>, BuildError> {
    b.div("text-lg leading-relaxed")?.children([
        heading(b, "What is domscript?")?.into(),
        b.p("")?
            .children([b.text(
                "domscript builds element trees from per-tag functions: \
                 a selector string, chained attributes, then children.",
            )])?
            .into(),
        b.ol("list-decimal list-inside ml-5 my-3")?
            .children([
                b.li("")?.children([b.text("One builder per tag name.")])?.into(),
                b.li("")?
                    .children([b.text("Selector strings for ids and classes.")])?
                    .into(),
                b.li("")?
                    .children([b.text("A one-shot mount into a host slot.")])?
                    .into(),
            ])?
            .into(),
        heading(b, "Example")?.into(),
        b.pre("")?
            .children([b
                .code("language-rust")?
                .children([b.text(
                    "b.div(\"card-image\")?.children([\n    \
                     b.img(\"\")?.set(\"src\", \"images/sample-1.jpg\").set(\"alt\", \"Sample Image\").build()?.into(),\n    \
                     b.span(\"card-title\")?.children([b.text(\"Card Title\")])?.into(),\n])?",
                )])?
                .into()])?
            .into(),
    ])
}

fn page<'bump>(b: &Builder<'bump>) -> Result<Node<'bump>, BuildError> {
    b.body("bg-white")?.children([
        b.div("#top border-b border-gray-300 relative bg-white z-20")?
            .children([b
                .div("max-w-5xl mx-auto h-16 flex items-center")?
                .children([b
                    .h1("font-bold text-2xl")?
                    .children([b.text("domscript")])?
                    .into()])?
                .into()])?
            .into(),
        b.div("relative max-w-3xl mx-auto bg-white z-10 border-l px-10")?
            .children([content(b)?.into()])?
            .into(),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bump = Bump::new();
    let b = Builder::new(&bump);

    let app = page(&b)?;
    let mut slot = StringSlot::new();
    mount(&app, &mut slot)?;
    println!("{}", slot.content().unwrap_or_default());
    Ok(())
}
