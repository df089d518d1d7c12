use coil::Reconciliation;

fn doc_with_loops(radii: &[f64]) -> String {
    let mut doc = String::from("current: 3\nfreq: 50.0\nloops:\n");
    for radius in radii {
        doc.push_str(&format!(
            "  - radius: {radius:.1}\n    x_center: 0.0\n    y_center: 0.0\n"
        ));
    }
    doc
}

#[test]
fn more_loops_than_requested_keeps_the_first_entries() {
    let doc = doc_with_loops(&[1.0, 2.0, 3.0]);
    let (coil, outcome) = coil::parse_str(&doc, 2).unwrap();
    assert_eq!(
        outcome,
        Reconciliation::Truncated {
            observed: 3,
            kept: 2
        }
    );
    assert_eq!(outcome.final_len(), 2);
    assert_eq!(coil.loops.len(), 2);
    assert!((coil.loops[0].radius - 1.0).abs() < 1e-9);
    assert!((coil.loops[1].radius - 2.0).abs() < 1e-9);
    // The surplus third entry never made it into the record.
    assert!(coil.loops.iter().all(|l| (l.radius - 3.0).abs() > 1e-9));
}

#[test]
fn fewer_loops_than_requested_shrinks_storage() {
    let doc = doc_with_loops(&[1.0]);
    let (coil, outcome) = coil::parse_str(&doc, 3).unwrap();
    assert_eq!(
        outcome,
        Reconciliation::Shrunk {
            requested: 3,
            len: 1
        }
    );
    assert_eq!(outcome.final_len(), 1);
    assert_eq!(coil.loops.len(), 1);
    assert!(coil.loops.capacity() < 3);
}

#[test]
fn top_level_fields_survive_a_truncated_parse() {
    let doc = doc_with_loops(&[1.0, 2.0, 3.0, 4.0]);
    let (coil, outcome) = coil::parse_str(&doc, 1).unwrap();
    assert_eq!(outcome.final_len(), 1);
    assert_eq!(coil.current, 3);
    assert!((coil.frequency - 50.0).abs() < 1e-9);
}

#[test]
fn empty_loop_list_reconciles_to_zero() {
    let doc = "current: 3\nfreq: 50.0\nloops: []\n";
    let (coil, outcome) = coil::parse_str(doc, 2).unwrap();
    assert_eq!(
        outcome,
        Reconciliation::Shrunk {
            requested: 2,
            len: 0
        }
    );
    assert!(coil.loops.is_empty());
}
