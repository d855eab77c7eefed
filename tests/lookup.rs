use ease::{Curve, ResolveError, functions};

fn same_outputs(a: ease::CurveFn<f64>, b: ease::CurveFn<f64>) -> bool {
    [0.0, 0.1, 0.33, 0.5, 0.72, 0.9, 1.0]
        .iter()
        .all(|&p| a(p).to_bits() == b(p).to_bits() || (a(p).is_nan() && b(p).is_nan()))
}

#[test]
fn test_name_casing_resolves_same_function_as_tag() {
    let by_tag = ease::get::<f64>(Curve::InCubic);
    for name in ["InCubic", "in-cubic", "IN_CUBIC", "in cubic"] {
        let by_name = ease::get_by_name::<f64>(name).expect(name);
        assert!(same_outputs(by_name, by_tag), "{name}");
        assert_eq!(name.parse::<Curve>(), Ok(Curve::InCubic));
    }
}

#[test]
fn test_every_canonical_name_resolves_to_its_tag() {
    for curve in Curve::ALL {
        let by_name = ease::get_by_name::<f64>(curve.name()).expect(curve.name());
        assert!(same_outputs(by_name, ease::get(curve)), "{curve}");

        let shouted = curve.name().to_uppercase().replace('-', "_");
        assert_eq!(shouted.parse::<Curve>(), Ok(curve));
    }
}

#[test]
fn test_unknown_names() {
    for name in ["inside", "bounceinout", "", "in", "out", "ease-in-cubic", "cubic"] {
        assert!(ease::get_by_name::<f64>(name).is_none(), "{name:?}");
        assert_eq!(
            name.parse::<Curve>(),
            Err(ResolveError::UnknownName(name.to_string()))
        );
    }
}

#[test]
fn test_unknown_ids() {
    assert!(ease::get_by_id::<f64>(Curve::COUNT as u8).is_none());
    assert!(ease::get_by_id::<f32>(200).is_none());
    assert_eq!(Curve::try_from(64), Err(ResolveError::UnknownId(64)));
}

#[test]
fn test_ids_resolve_in_declaration_order() {
    assert!(same_outputs(
        ease::get_by_id::<f64>(0).unwrap(),
        functions::linear
    ));
    assert!(same_outputs(
        ease::get_by_id::<f64>(Curve::InOutBounce.id()).unwrap(),
        functions::in_out_bounce
    ));
    assert!(same_outputs(
        ease::get_by_id::<f64>(Curve::OutExponential.into()).unwrap(),
        functions::out_exponential
    ));
}

#[test]
fn test_error_propagates_with_question_mark() {
    fn load(names: &[&str]) -> Result<Vec<Curve>, ResolveError> {
        names.iter().map(|name| name.parse()).collect()
    }

    assert_eq!(
        load(&["linear", "out-back"]),
        Ok(vec![Curve::Linear, Curve::OutBack])
    );
    assert_eq!(
        load(&["linear", "wobble"]),
        Err(ResolveError::UnknownName("wobble".to_string()))
    );
}

#[test]
fn test_resolved_functions_are_shareable_across_threads() {
    let f = ease::get_by_name::<f64>("in-out-bounce").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || f(i as f64 / 4.0)))
        .collect();
    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, value) in results.iter().enumerate() {
        assert_eq!(*value, f(i as f64 / 4.0));
    }
}
