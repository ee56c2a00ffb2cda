use super::*;

#[test]
fn field_holds_the_configured_particle_count() {
    assert_eq!(AmbientField::new(1, Some(7)).len(), 1);
    assert_eq!(AmbientField::new(3, Some(7)).len(), 3);
}

#[test]
fn particles_stay_inside_the_soft_boundary() {
    let mut field = AmbientField::new(3, Some(42));
    let mut emitted = Vec::new();
    for frame in 0..5_000 {
        field.update(frame as f64 / 60.0, 1.0, |x, y| emitted.push((x, y)));
    }
    assert!(!emitted.is_empty());
    for (x, y) in emitted {
        assert!((BOUND_MIN..=BOUND_MAX).contains(&x), "x escaped: {x}");
        assert!((BOUND_MIN..=BOUND_MAX).contains(&y), "y escaped: {y}");
    }
}

#[test]
fn emission_probability_bounds_emissions() {
    let mut field = AmbientField::new(2, Some(9));

    let mut none = 0;
    field.update(0.0, 0.0, |_, _| none += 1);
    assert_eq!(none, 0);

    let mut all = 0;
    field.update(0.0, 1.0, |_, _| all += 1);
    assert_eq!(all, 2);
}

#[test]
fn seeded_fields_wander_identically() {
    let mut a = AmbientField::new(2, Some(1234));
    let mut b = AmbientField::new(2, Some(1234));
    let mut pa = Vec::new();
    let mut pb = Vec::new();
    for frame in 0..100 {
        let t = frame as f64 / 60.0;
        a.update(t, 1.0, |x, y| pa.push((x, y)));
        b.update(t, 1.0, |x, y| pb.push((x, y)));
    }
    assert_eq!(pa, pb);
}
