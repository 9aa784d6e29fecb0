//! End-to-end test of a registration round over the metro example.
use std::path::Path;
use vaxmap::input::load_registry;
use vaxmap::report::ReportKind;
use vaxmap::simulation::run;

#[test]
fn test_metro_round() {
    let mut registry = load_registry(Path::new("demos/metro/data.json"), 18).unwrap();
    let notices: Vec<String> = registry
        .clone()
        .register_for_shots()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        notices,
        [
            "Ada Lovelace added to queue at Kitsilano",
            "Grace Hopper added to queue at Kitsilano",
            "All members of household at block 5 in Vancouver are vaccinated.",
            "Alan Turing added to queue at Commercial Drive",
            "All members of household at block 9 in Vancouver are vaccinated.",
            "Edsger Dijkstra added to queue at Metrotown",
            "All members of household at block 1 in Burnaby are vaccinated.",
            "No clinics available near household at block 2 in Hope",
        ]
    );

    let mut out = Vec::new();
    run(&mut registry, ReportKind::Complex, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap().lines().collect::<Vec<_>>(),
        [
            "Complex Report:",
            "Average Wait Time at Kitsilano: 30 min",
            "Kitsilano - 2 People In Lineup",
            "Average Wait Time at Commercial Drive: 15 min",
            "Commercial Drive - 1 People In Lineup",
            "Average Wait Time at Metrotown: 15 min",
            "Metrotown - 1 People In Lineup",
            "---End of Report---",
            "H,x,C,x,x,F,x,x,C,F // Vancouver",
            "x,F,x,C,F // Burnaby",
            "x,x,H // Hope",
            "---End of Map---",
        ]
    );
}
