//! Reference predictions from the augmented model.
//!
//! These need `models/langdetect_augmented.bin`; run them with
//! `cargo test -- --ignored` once the artifact is in place.

use langident_core::{IdentifierConfig, LangIdentifier, ModelVariant};

fn augmented() -> LangIdentifier {
    let model_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models");
    let config = IdentifierConfig::new()
        .with_variant(ModelVariant::Augmented)
        .with_model_dir(model_dir);
    LangIdentifier::new(config).unwrap()
}

fn top_label(text: &str) -> String {
    let predictions = augmented().predict_lang(text).unwrap();
    predictions[0].label.clone()
}

#[test]
#[ignore = "requires models/langdetect_augmented.bin"]
fn romanized_formal_tamil() {
    assert_eq!(
        top_label("indhiya idhayangalil hockeyai uchathukku kondu sendra singa pengal"),
        "__label__ta-rom"
    );
}

#[test]
#[ignore = "requires models/langdetect_augmented.bin"]
fn romanized_spoken_tamil() {
    assert_eq!(
        top_label("naan evlo solliyum kekkaama avan paattukku irukkaan"),
        "__label__ta-rom"
    );
}

#[test]
#[ignore = "requires models/langdetect_augmented.bin"]
fn romanized_malayalam() {
    assert_eq!(
        top_label("athe, athu thanne. athu nallapadi theerkkanam ketto"),
        "__label__ml-rom"
    );
}

#[test]
#[ignore = "requires models/langdetect_augmented.bin"]
fn romanized_hindi() {
    assert_eq!(
        top_label("teesri lehar ke dar ke beech kya yeh school kholne ka sahi waqt hai?"),
        "__label__hi-rom"
    );
}

#[test]
#[ignore = "requires models/langdetect_augmented.bin"]
fn romanized_arabic() {
    assert_eq!(
        top_label("7ala2 bel beit w rayi7 3al she5el w reji3 da7ir ma3 lshabeb w inte?"),
        "__label__ar-rom"
    );
}

#[test]
#[ignore = "requires models/langdetect_augmented.bin"]
fn batch_prediction_matches_single() {
    let identifier = augmented();
    let texts = vec![
        "naan evlo solliyum kekkaama avan paattukku irukkaan",
        "athe, athu thanne. athu nallapadi theerkkanam ketto",
    ];
    let batch = identifier.predict(texts.clone()).unwrap().into_batch();

    assert_eq!(batch.len(), texts.len());
    for (text, predictions) in texts.iter().zip(&batch) {
        assert_eq!(predictions, &identifier.predict_lang(text).unwrap());
    }
}
