//! Integration tests for relabeling and substitution.

use blocksync_blocks::{
    Anchoring, BlockMarkers, Label, Substitution, extract_block, relabel_block, substitute_block,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn admin_label() -> Label {
    Label::new(
        "{/* Create Vehicle Modal */}",
        "{/* Create Vehicle Modal - Same as Admin */}",
    )
}

#[test]
fn test_relabel_only_first_occurrence() {
    let block = "{/* Create Vehicle Modal */}\n<p>{/* Create Vehicle Modal */}</p>\n</Modal>";
    let relabeled = relabel_block(block, &admin_label());

    insta::assert_snapshot!(relabeled, @r"
    {/* Create Vehicle Modal - Same as Admin */}
    <p>{/* Create Vehicle Modal */}</p>
    </Modal>
    ");
}

#[test]
fn test_relabel_preserves_indentation_and_nesting() {
    let block = "      {/* Create Vehicle Modal */}\n\t<Modal>\n\t\t</Modal>\n      </Modal>";
    let relabeled = relabel_block(block, &admin_label());
    assert_eq!(
        relabeled,
        "      {/* Create Vehicle Modal - Same as Admin */}\n\t<Modal>\n\t\t</Modal>\n      </Modal>"
    );
}

#[test]
fn test_substitute_replaces_whole_block() {
    let target = "head\n  {/* Create Vehicle Modal */}\n  <other/>\n  </Modal>\nfoot\n";
    let markers = BlockMarkers::new("{/* Create Vehicle Modal", "</Modal>");

    let result = substitute_block(target, &markers, "  NEW\n  </Modal>").unwrap();

    match result {
        Substitution::Replaced { document, replaced } => {
            assert_eq!(document, "head\n  NEW\n  </Modal>\nfoot\n");
            assert_eq!((replaced.start_line, replaced.end_line), (2, 4));
        }
        Substitution::NoMatch { .. } => panic!("expected a replacement"),
    }
}

#[test]
fn test_substitute_only_first_block() {
    let target = "  {/* A */}\n  one\n  </Modal>\n  {/* A */}\n  two\n  </Modal>";
    let markers = BlockMarkers::new("{/* A */}", "</Modal>");

    let result = substitute_block(target, &markers, "  X").unwrap();
    assert_eq!(
        result.into_document(),
        "  X\n  {/* A */}\n  two\n  </Modal>"
    );
}

#[test]
fn test_scenario_copy_between_documents() {
    let source = "  {/* Create Vehicle Modal */}\n  <fields/>\n  </Modal>";
    let target = "  {/* Create Vehicle Modal */}\n  <other/>\n  </Modal>";

    let block = extract_block(
        source,
        &BlockMarkers::new("{/* Create Vehicle Modal */}", "</Modal>"),
    )
    .unwrap();
    let replacement = relabel_block(&block.text, &admin_label());
    let result = substitute_block(
        target,
        &BlockMarkers::new("{/* Create Vehicle Modal", "</Modal>"),
        &replacement,
    )
    .unwrap();

    assert_eq!(
        result.document(),
        "  {/* Create Vehicle Modal - Same as Admin */}\n  <fields/>\n  </Modal>"
    );
}

proptest! {
    #[test]
    fn substitution_only_touches_the_block(
        prefix in "[a-z \n]{0,40}",
        body in "[a-z<>/ \n]{0,40}",
        suffix in "[a-z \n]{0,40}",
        replacement in "[a-zA-Z$ \n]{0,40}",
    ) {
        let block = format!("{{/* A */}}{body}</Modal>");
        let target = format!("{prefix}\n{block}{suffix}");
        let markers = BlockMarkers::new("{/* A */}", "</Modal>")
            .with_anchoring(Anchoring::Anywhere);

        let result = substitute_block(&target, &markers, &replacement).unwrap();
        prop_assert!(result.is_replaced());

        let expected = format!("{prefix}\n{replacement}{suffix}");
        prop_assert_eq!(result.into_document(), expected);
    }
}
