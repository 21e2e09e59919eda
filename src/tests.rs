#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    use crate::generator::sample_combination;
    use crate::letters::letters_of;
    use crate::{
        check_grid, export_words_json, flatten_word_records, has_same_word_set, is_unique, letter_count,
        normalize_word_lines, parse_words, reconstruct_preview, sort_rows, to_german_upper_case, to_grid_rows,
        unique_word_keys, validate_generation_input, GenerationFailure, GeneratorConfig, Grid, GridGraphBuilder,
        InputError, Layout, LayoutGenerator, LetterCoord, LetterRow, Location, PathCell, Step, WordPlacer, WordRecord, WordStatus,
        BLANK, GRID_SIZE,
    };

    // 48 distinct letters, so any placement is trivially unique
    const DISTINCT_WORDS: [&str; 11] = [
        "AB", "CDE", "FGH", "IJKL", "MNOP", "QRST", "UVWXY", "Zabcd", "efghij", "klmnop", "qrstuv",
    ];

    const GERMAN_WORDS: [&str; 8] = ["GARTEN", "BLUMEN", "WOLKEN", "KIRSCH", "HIMMEL", "STRAND", "DRACHE", "FISCHE"];

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn row(word: &str, letter: &str, cx: i64, cy: i64) -> LetterRow {
        LetterRow { word: word.to_owned(), letter: letter.to_owned(), cx, cy }
    }

    fn paco_imke_rows() -> Vec<LetterRow> {
        vec![
            row("PACO", "P", 1, 1),
            row("PACO", "A", 1, 2),
            row("PACO", "C", 1, 3),
            row("PACO", "O", 1, 4),
            row("IMKE", "I", 2, 1),
            row("IMKE", "M", 2, 2),
            row("IMKE", "K", 2, 3),
            row("IMKE", "E", 2, 4),
        ]
    }

    fn grid_of(lines: &[&str]) -> Grid {
        let cells = lines.iter()
            .flat_map(|line| {
                let mut row = line.chars().map(|c| if c == '.' { BLANK.to_owned() } else { c.to_string() }).collect_vec();
                row.resize(6, BLANK.to_owned());
                row
            })
            .collect_vec();
        Grid::from_strings(&cells)
    }

    mod words {
        use super::*;

        #[test]
        fn parses_lines_and_ignores_blanks() {
            let parsed = parse_words("  alpha \n\nbeta \n  \nämter");

            assert_eq!(parsed.words, vec!["alpha", "beta", "ämter"]);
            assert_eq!(parsed.total_letters, 14);
            assert!(parsed.invalid_words.is_empty());
        }

        #[test]
        fn keeps_eszett_as_one_letter() {
            let parsed = parse_words("süßlich");

            assert_eq!(parsed.words, vec!["süßlich"]);
            assert_eq!(parsed.total_letters, 7);
            assert!(parsed.invalid_words.is_empty());
        }

        #[test]
        fn parsing_is_idempotent() {
            let once = parse_words(" Wasser\n\nBESEN \nsüßlich");
            let twice = parse_words(&once.words.join("\n"));

            assert_eq!(once, twice);
        }

        #[rstest]
        #[case("TEST\nAB-12\nÖL", vec!["AB-12"])]
        #[case("Straße\nSTRAẞE", vec![])]
        #[case("hello world\nçava", vec!["hello world", "çava"])]
        #[case("ÄÖÜäöü", vec![])]
        fn flags_words_outside_the_alphabet(#[case] input: &str, #[case] expected: Vec<&str>) {
            assert_eq!(parse_words(input).invalid_words, expected);
        }

        #[test]
        fn counts_graphemes_not_bytes() {
            assert_eq!(letter_count("ẞ"), 1);
            assert_eq!(letter_count("e\u{301}tude"), 5);
            assert_eq!(letters_of("süß").len(), 3);
        }

        #[test]
        fn upper_cases_eszett_without_expanding() {
            assert_eq!(to_german_upper_case("süßlich"), "SÜẞLICH");
        }

        #[test]
        fn rejects_too_few_letters() {
            let validation = validate_generation_input(&["PACO", "IMKE", ""]);

            assert_eq!(validation.error, Some(InputError::LetterCount { expected: 48, total: 8 }));
            assert!(validation.error.unwrap().to_string().contains("48"));
        }

        #[test]
        fn rejects_empty_input() {
            assert_eq!(validate_generation_input(&["", "  "]).error, Some(InputError::NoWords));
        }

        #[test]
        fn rejects_invalid_characters() {
            let validation = validate_generation_input(&["PACO", "IMKE-1", ""]);

            assert_eq!(
                validation.error.map(|error| error.to_string()),
                Some("Ungültige Zeichen gefunden. Erlaubt sind nur Buchstaben (inkl. ÄÖÜẞ).".to_owned())
            );
        }

        #[test]
        fn rejects_duplicate_words() {
            let lines = [
                "ABCD", "EFGH", "IJKL", "MNOP", "QRST", "UVWX", "YZAB", "CDEF", "GHIJ", "KLMN", "OPQR", "abcd ", "",
            ];
            let validation = validate_generation_input(&lines);

            assert_eq!(validation.error, Some(InputError::DuplicateWords { words: vec!["abcd".to_owned()] }));
            assert!(validation.error.unwrap().to_string().contains("abcd"));
        }

        #[test]
        fn accepts_well_formed_input() {
            let lines = [
                "ABCD", "EFGH", "IJKL", "MNOP", "QRST", "UVWX", "YZAB", "CDEF", "GHIJ", "KLMN", "OPQR", "STÜẞ", "",
            ];
            let validation = validate_generation_input(&lines);

            assert_eq!(validation.error, None);
            assert_eq!(validation.parsed.total_letters, GRID_SIZE);
        }

        #[test]
        fn keeps_one_trailing_empty_line() {
            assert_eq!(normalize_word_lines(&["PACO", "", ""]), vec!["PACO", ""]);
            assert_eq!(normalize_word_lines(&["PACO"]), vec!["PACO", ""]);
            assert_eq!(normalize_word_lines::<&str>(&[]), vec![""]);
        }

        #[test]
        fn compares_word_sets_ignoring_case_and_whitespace() {
            let rows = paco_imke_rows();

            assert!(has_same_word_set(&["IMKE", "PACO", ""], &rows));
            assert!(has_same_word_set(&["  imke ", "Paco", "", ""], &rows));
            assert!(!has_same_word_set(&["IMKE", "SOEREN", ""], &rows));
            assert!(!has_same_word_set(&["IMKE", "LOCO", ""], &rows));
        }

        #[test]
        fn repeated_input_words_never_match() {
            let rows = paco_imke_rows().into_iter().take(4).collect_vec();

            assert!(has_same_word_set(&["paco", ""], &rows));
            assert!(!has_same_word_set(&["PACO", "PACO", ""], &rows));
        }

        #[test]
        fn eszett_spellings_share_a_key() {
            let rows = vec![row("SÜẞLICH", "S", 1, 1)];

            assert!(has_same_word_set(&["süßlich", ""], &rows));
        }
    }

    mod graph {
        use super::*;

        #[test]
        fn one_diagonal_survives_per_block() {
            let graph = GridGraphBuilder::new().build(&mut rng(7));

            assert_eq!(graph.node_count(), GRID_SIZE);
            // 82 orthogonal edges, 70 diagonals, 35 of them pruned
            assert_eq!(graph.edge_count(), 117);

            for y in 1..8 {
                for x in 0..5 {
                    let forward = graph.are_adjacent(Location(x, y), Location(x + 1, y - 1));
                    let backward = graph.are_adjacent(Location(x + 1, y), Location(x, y - 1));
                    assert!(forward ^ backward, "block at ({}, {})", x, y);
                }
            }
        }

        #[test]
        fn adjacency_is_symmetric() {
            let graph = GridGraphBuilder::new().build(&mut rng(3));

            for cell in graph.cells() {
                for neighbor in graph.neighbors(cell) {
                    assert!(graph.neighbors(neighbor).contains(&cell));
                    assert!(cell.touches(&neighbor));
                }
            }
        }

        #[test]
        fn seeded_builds_are_reproducible() {
            let a = GridGraphBuilder::new().build(&mut rng(11));
            let b = GridGraphBuilder::new().build(&mut rng(11));

            for cell in a.cells() {
                assert_eq!(a.neighbors(cell), b.neighbors(cell));
            }
        }

        #[test]
        fn unpruned_graph_has_every_neighbor() {
            let graph = GridGraphBuilder::new().prune_diagonals(false).build(&mut rng(0));

            assert_eq!(graph.edge_count(), 152);
            assert_eq!(graph.neighbors(Location(0, 0)).len(), 3);
            assert_eq!(graph.neighbors(Location(2, 3)).len(), 8);
            assert_eq!(graph.edge_direction(Location(1, 1), Location(0, 0)), Some(Step::DownRight));
            assert_eq!(graph.edge_direction(Location(1, 0), Location(0, 1)), Some(Step::DownLeft));
            assert_eq!(graph.edge_direction(Location(0, 0), Location(2, 0)), None);
        }

        #[test]
        fn pruned_board_is_one_island() {
            let graph = GridGraphBuilder::new().build(&mut rng(5));
            let islands = graph.islands(&HashSet::new());

            assert_eq!(islands.len(), 1);
            assert_eq!(islands[0].len(), GRID_SIZE);
        }

        #[test]
        fn excluded_column_splits_the_board() {
            let graph = GridGraphBuilder::new().build(&mut rng(5));
            let wall: HashSet<Location> = (0..8).map(|y| Location(2, y)).collect();
            let islands = graph.islands(&wall);

            assert_eq!(islands.iter().map(Vec::len).collect_vec(), vec![16, 24]);
            let covered: HashSet<Location> = islands.iter().flatten().copied().collect();
            assert_eq!(covered.len(), 40);
            assert!(covered.is_disjoint(&wall));
        }

        #[test]
        fn longest_paths_on_a_short_row() {
            let graph = GridGraphBuilder::new().prune_diagonals(false).build(&mut rng(0));
            let row = graph.subgraph(&[Location(0, 0), Location(1, 0), Location(2, 0)]);
            let longest = row.longest_paths();

            assert_eq!(longest[&Location(0, 0)], 3);
            assert_eq!(longest[&Location(1, 0)], 2);
            assert_eq!(longest[&Location(2, 0)], 3);

            let single = graph.subgraph(&[Location(4, 4)]);
            assert_eq!(single.longest_paths()[&Location(4, 4)], 1);
        }

        #[test]
        fn bounded_longest_paths_are_capped() {
            let graph = GridGraphBuilder::new().build(&mut rng(9));
            let longest = graph.longest_paths_bounded(6);

            assert_eq!(longest.len(), GRID_SIZE);
            assert!(longest.values().all(|score| *score == 6));
        }
    }

    mod placement {
        use super::*;

        #[test]
        fn places_a_connected_path_on_free_cells() {
            let graph = GridGraphBuilder::new().build(&mut rng(21));
            let occupied: HashSet<Location> = [Location(0, 0), Location(1, 1), Location(2, 2)].into_iter().collect();
            let longest = graph.longest_paths_bounded(5);
            let letters = letters_of("WORTE");

            for seed in 0..20 {
                let path = WordPlacer::new(&graph, &occupied, &longest).place(&letters, &mut rng(seed)).unwrap();

                assert_eq!(path.len(), 5);
                assert_eq!(path.iter().unique().count(), 5);
                assert!(path.iter().all(|cell| !occupied.contains(cell)));
                assert!(path.iter().tuple_windows().all(|(a, b)| graph.are_adjacent(*a, *b)));
            }
        }

        #[test]
        fn reports_failure_when_no_start_is_long_enough() {
            let graph = GridGraphBuilder::new().build(&mut rng(21));
            let island = graph.subgraph(&[Location(0, 0), Location(1, 0)]);
            let longest = island.longest_paths();

            let placed = WordPlacer::new(&island, &HashSet::new(), &longest).place(&letters_of("ABC"), &mut rng(0));
            assert_eq!(placed, None);
        }

        #[test]
        fn combinations_match_the_target_exactly() {
            for seed in 0..10 {
                let chosen = sample_combination(&[2, 3, 5], 5, &mut rng(seed)).unwrap();
                assert!(chosen == vec![0, 1] || chosen == vec![2], "{:?}", chosen);
            }
            assert_eq!(sample_combination(&[2, 3, 5], 10, &mut rng(0)), Some(vec![0, 1, 2]));
            assert_eq!(sample_combination(&[2, 3, 5], 4, &mut rng(0)), None);
            assert_eq!(sample_combination(&[2, 3, 5], 0, &mut rng(0)), None);
        }

        #[test]
        fn combinations_are_drawn_from_every_match() {
            let drawn: HashSet<Vec<usize>> = (0..200)
                .filter_map(|seed| sample_combination(&[1, 1, 1, 2], 2, &mut rng(seed)))
                .collect();

            // {0,1}, {0,2}, {1,2} and {3}
            assert_eq!(drawn.len(), 4);
        }
    }

    mod uniqueness {
        use super::*;

        #[test]
        fn finds_words_in_every_direction() {
            let grid = grid_of(&["CAT...", ".O....", "..G..."]);

            assert_eq!(grid.find_word(&letters_of("COG")), vec![vec![Location(0, 0), Location(1, 1), Location(2, 2)]]);
            assert_eq!(grid.find_word(&letters_of("TAC")).len(), 1);
            assert!(grid.find_word(&letters_of("DOG")).is_empty());
        }

        #[test]
        fn retracing_the_same_cells_is_not_ambiguous() {
            let grid = grid_of(&["AN....", "AN...."]);

            assert_eq!(grid.find_word(&letters_of("ANNA")).len(), 4);
            assert!(is_unique(&grid, &["ANNA"]));
        }

        #[test]
        fn a_second_placement_is_ambiguous() {
            let grid = grid_of(&["AB....", "....AB"]);

            assert!(!is_unique(&grid, &["AB"]));
            assert!(!is_unique(&grid, &["A", ""]));
        }

        #[test]
        fn missing_words_are_not_unique() {
            let grid = grid_of(&["AB...."]);

            assert!(!is_unique(&grid, &["XY"]));
            assert!(is_unique(&grid, &["AB", " "]));
        }

        #[test]
        fn check_grid_reports_each_word() {
            let grid = grid_of(&["AB..AB", "CD....", "......"]);
            let check = check_grid(&grid, &["AB", "CD", "XY", ""], true);

            assert_eq!(check.statuses, vec![WordStatus::Multiple, WordStatus::Valid, WordStatus::Missing, WordStatus::Empty]);
            assert_eq!(check.locations[1], vec![vec![Location(0, 1), Location(1, 1)]]);
            assert!(!check.valid);

            let check = check_grid(&grid, &["CD"], true);
            assert!(check.valid);
            let check = check_grid(&grid, &["CD"], false);
            assert!(!check.valid);
            assert!(!check_grid::<&str>(&grid, &[], true).valid);
        }
    }

    mod generation {
        use super::*;

        fn assert_weaves(layout: &Layout, words: &[&str]) {
            assert_eq!(layout.cells().len(), GRID_SIZE);
            assert_eq!(layout.grid.filled(), GRID_SIZE);
            assert_eq!(layout.rows.len(), GRID_SIZE);
            assert!(is_unique(&layout.grid, words));

            // paths follow the caller's order
            assert_eq!(layout.paths.iter().map(|path| path.word.as_str()).collect_vec(), words.to_vec());

            let mut covered = HashSet::new();
            for path in &layout.paths {
                assert_eq!(path.cells.len(), letter_count(&path.word));
                let spelled = path.cells.iter().map(|cell| cell.letter.as_str()).collect::<String>();
                assert_eq!(spelled, path.word);
                assert!(path.cells.iter().tuple_windows().all(|(a, b)| a.location().touches(&b.location())));
                for cell in &path.cells {
                    assert!(covered.insert(cell.location()), "cell {:?} used twice", cell.location());
                }
            }
            assert_eq!(covered.len(), GRID_SIZE);

            for row in &layout.rows {
                let location = row.location().unwrap();
                assert_eq!(layout.grid.get(location).map(|letter| letter.as_str()), Some(row.letter.as_str()));
            }
        }

        fn config() -> GeneratorConfig {
            GeneratorConfig { attempts: 200, ..GeneratorConfig::default() }
        }

        #[test]
        fn default_config_matches_documented_limits() {
            let config = GeneratorConfig::default();

            assert_eq!(config.attempts, 50);
            assert_eq!(config.placement_retries, 50);
        }

        #[test]
        fn config_accepts_partial_json() {
            let config: GeneratorConfig = serde_json::from_str(r#"{"attempts": 3}"#).unwrap();

            assert_eq!(config, GeneratorConfig { attempts: 3, ..GeneratorConfig::default() });
        }

        #[test]
        fn generated_layouts_hold_every_word_once() {
            let generator = LayoutGenerator::new(config());
            let layouts = (0..4)
                .filter_map(|seed| generator.generate(&DISTINCT_WORDS, &mut rng(seed)).ok())
                .collect_vec();
            assert!(!layouts.is_empty());

            for layout in &layouts {
                assert_weaves(layout, &DISTINCT_WORDS);
            }
        }

        #[test]
        fn weaves_words_sharing_letters() {
            let generator = LayoutGenerator::default();
            let layouts = (0..6)
                .filter_map(|seed| generator.generate(&GERMAN_WORDS, &mut rng(seed)).ok())
                .collect_vec();
            assert!(!layouts.is_empty());

            for layout in &layouts {
                assert_weaves(layout, &GERMAN_WORDS);

                let preview = reconstruct_preview(&layout.rows);
                assert_eq!(preview.grid, layout.grid);
                assert_eq!(preview.paths.len(), GERMAN_WORDS.len());
                for (rebuilt, placed) in preview.paths.iter().zip(&layout.paths) {
                    assert_eq!(rebuilt.word, placed.word);
                    let rebuilt_cells: HashSet<Location> = rebuilt.cells.iter().map(PathCell::location).collect();
                    let placed_cells: HashSet<Location> = placed.cells.iter().map(PathCell::location).collect();
                    assert_eq!(rebuilt_cells, placed_cells);
                }
            }
        }

        #[test]
        fn mirrored_words_are_always_undone() {
            // wherever BA lands, its letters also spell AB
            let words = [
                "AB", "BA", "w", "FGH", "IJKL", "MNOP", "QRST", "UVWXY", "Zabcd", "efghij", "klmnop", "qrstuv",
            ];
            let generator = LayoutGenerator::new(GeneratorConfig { attempts: 2, placement_retries: 20, placement_budget: 2_000 });

            assert_eq!(
                generator.generate(&words, &mut rng(0)).unwrap_err(),
                GenerationFailure::Exhausted { attempts: 2 }
            );
        }

        #[test]
        fn seeded_generation_is_reproducible() {
            let generator = LayoutGenerator::new(config());
            let a = generator.generate(&DISTINCT_WORDS, &mut rng(42));
            let b = generator.generate(&DISTINCT_WORDS, &mut rng(42));

            assert_eq!(a.map(|layout| layout.rows), b.map(|layout| layout.rows));
        }

        #[test]
        fn exhausts_when_the_board_cannot_be_filled() {
            let generator = LayoutGenerator::new(GeneratorConfig { attempts: 3, ..GeneratorConfig::default() });

            assert_eq!(
                generator.generate(&["PACO", "IMKE"], &mut rng(0)).unwrap_err(),
                GenerationFailure::Exhausted { attempts: 3 }
            );
        }

        #[test]
        fn rejects_empty_words() {
            let generator = LayoutGenerator::default();

            assert_eq!(
                generator.generate(&["PACO", ""], &mut rng(0)).unwrap_err(),
                GenerationFailure::EmptyWord { index: 1 }
            );
        }

        #[test]
        fn no_words_make_an_empty_layout() {
            let layout = LayoutGenerator::default().generate::<&str, _>(&[], &mut rng(0)).unwrap();

            assert!(layout.grid.is_empty());
            assert!(layout.rows.is_empty());
            assert!(layout.paths.is_empty());
        }

        #[test]
        fn rows_swap_axes() {
            let row = LetterRow::at("PACO", "C", Location(2, 5));

            assert_eq!((row.cx, row.cy), (6, 3));
            assert_eq!(row.location(), Some(Location(2, 5)));

            let corrupt = LetterRow { cx: i64::MIN, cy: i64::MIN, ..row };
            assert_eq!(corrupt.location(), None);
        }
    }

    mod preview {
        use super::*;

        #[test]
        fn rebuilds_grid_and_paths() {
            let preview = reconstruct_preview(&paco_imke_rows());
            let cells = preview.grid.to_strings();

            assert_eq!(&cells[0..4], &["P", "A", "C", "O"]);
            assert_eq!(cells[6], "I");
            assert_eq!(cells[47], BLANK);
            assert_eq!(preview.paths.iter().map(|path| path.word.as_str()).collect_vec(), vec!["PACO", "IMKE"]);
            assert_eq!(preview.paths[0].cells.len(), 4);
        }

        #[test]
        fn skips_out_of_bounds_rows() {
            let rows = vec![
                row("PACO", "P", 1, 1),
                row("PACO", "A", 1, 2),
                row("PACO", "C", 9, 9),
                row("PACO", "O", -1, 4),
                row("PACO", "P", 1, i64::MIN),
                row("PACO", "A", i64::MIN, 2),
                row("PACO", "C", i64::MAX, i64::MAX),
            ];
            let preview = reconstruct_preview(&rows);

            assert_eq!(preview.grid.filled(), 2);
            assert_eq!(preview.paths.len(), 1);
            assert_eq!(preview.paths[0].cells.len(), 2);
        }

        #[test]
        fn tolerates_duplicate_rows() {
            let mut rows = paco_imke_rows();
            rows.insert(1, row("PACO", "P", 1, 1));
            let preview = reconstruct_preview(&rows);

            assert!(preview.paths.iter().any(|path| path.word == "PACO"));
        }

        #[test]
        fn later_rows_win_a_shared_cell() {
            let rows = vec![row("AB", "A", 1, 1), row("AB", "B", 1, 2), row("XY", "X", 1, 1)];
            let preview = reconstruct_preview(&rows);

            assert_eq!(preview.grid.get(Location(0, 0)).map(|letter| letter.as_str()), Some("X"));
        }

        #[test]
        fn keeps_first_appearance_order() {
            let rows = paco_imke_rows().into_iter().sorted_by_key(|row| (row.cy, row.cx)).rev().collect_vec();
            let preview = reconstruct_preview(&rows);

            assert_eq!(preview.paths.iter().map(|path| path.word.as_str()).collect_vec(), vec!["IMKE", "PACO"]);
        }

        #[test]
        fn falls_back_to_row_major_cells() {
            // letters do not spell the word, but the cells are neighbors
            let rows = vec![row("ABC", "x", 2, 2), row("ABC", "y", 1, 1), row("ABC", "z", 1, 2)];
            let preview = reconstruct_preview(&rows);

            assert_eq!(preview.paths.len(), 1);
            let locations = preview.paths[0].cells.iter().map(|cell| cell.location()).collect_vec();
            assert_eq!(locations, vec![Location(0, 0), Location(1, 0), Location(1, 1)]);
        }

        #[test]
        fn omits_words_that_cannot_be_traced() {
            let rows = vec![row("ABC", "x", 1, 1), row("ABC", "y", 5, 5), row("ABC", "z", 8, 6)];
            let preview = reconstruct_preview(&rows);

            assert!(preview.paths.is_empty());
            assert_eq!(preview.grid.filled(), 3);
        }

        #[test]
        fn groups_spellings_of_one_word() {
            let rows = vec![row("Paco", "P", 1, 1), row(" PACO ", "A", 1, 2), row("", "C", 1, 3), row("PACO", " ", 1, 4)];
            let preview = reconstruct_preview(&rows);

            assert_eq!(preview.grid.filled(), 2);
            assert_eq!(preview.paths.len(), 1);
            assert_eq!(preview.paths[0].word, "Paco");
            assert_eq!(preview.paths[0].cells.len(), 2);
        }

        #[test]
        fn inverts_a_generated_layout() {
            let generator = LayoutGenerator::new(GeneratorConfig { attempts: 200, ..GeneratorConfig::default() });
            let layouts = (0..4)
                .filter_map(|seed| generator.generate(&DISTINCT_WORDS, &mut rng(seed)).ok())
                .collect_vec();
            assert!(!layouts.is_empty());

            for layout in layouts {
                let preview = reconstruct_preview(&layout.rows);

                assert_eq!(preview.grid, layout.grid);
                assert_eq!(preview.paths, layout.paths);
                assert!(has_same_word_set(&DISTINCT_WORDS, &layout.rows));
            }
        }
    }

    mod rows {
        use super::*;

        #[test]
        fn sorts_by_word_then_letter_then_coordinates() {
            let mut rows = vec![
                row("Wasser", "r", 7, 1),
                row("besen", "e", 4, 6),
                row("wasser", "a", 6, 1),
                row("Besen", "b", 5, 5),
                row("besen", "e", 6, 6),
            ];
            sort_rows(&mut rows);

            assert_eq!(rows, vec![
                row("Besen", "b", 5, 5),
                row("besen", "e", 4, 6),
                row("besen", "e", 6, 6),
                row("wasser", "a", 6, 1),
                row("Wasser", "r", 7, 1),
            ]);
        }

        #[test]
        fn flattens_nested_records() {
            let records: Vec<WordRecord> = serde_json::from_str(r#"[
                {"id": 11, "word": "wasser", "game_letter": [{"letter": "s", "cx": 8, "cy": 2}, {"letter": "a", "cx": 6, "cy": 1}]},
                {"id": 10, "word": "besen", "letters": [{"letter": "e", "cx": 4, "cy": 6}, {"letter": "b", "cx": 5, "cy": 5}]}
            ]"#).unwrap();

            assert_eq!(records[1].letters[0], LetterCoord { letter: "e".to_owned(), cx: 4, cy: 6 });
            assert_eq!(flatten_word_records(&records), vec![
                row("besen", "b", 5, 5),
                row("besen", "e", 4, 6),
                row("wasser", "a", 6, 1),
                row("wasser", "s", 8, 2),
            ]);
        }

        #[test]
        fn letter_rows_keep_their_wire_shape() {
            let json = serde_json::to_value(row("PACO", "P", 1, 2)).unwrap();

            assert_eq!(json, serde_json::json!({"word": "PACO", "letter": "P", "cx": 1, "cy": 2}));
            let lenient: LetterRow = serde_json::from_str(r#"{"cx": 3}"#).unwrap();
            assert_eq!(lenient, row("", "", 3, 0));
        }

        #[test]
        fn lists_word_keys_once() {
            let mut rows = paco_imke_rows();
            rows.push(row(" paco", "x", 3, 3));
            rows.push(row("", "x", 3, 4));

            assert_eq!(unique_word_keys(&rows), vec!["paco", "imke"]);
        }

        #[test]
        fn exports_words_keyed_in_lower_case() {
            let grid = grid_of(&["PACO..", "IMKE.."]);
            let json: serde_json::Value = serde_json::from_str(&export_words_json(&grid, &["PACO", "IMKE", "", "XY"]).unwrap()).unwrap();

            assert_eq!(json["paco"][0], serde_json::json!({"letter": "p", "cX": 1, "cY": 1}));
            assert_eq!(json["imke"][3], serde_json::json!({"letter": "e", "cX": 2, "cY": 4}));
            assert!(json.get("xy").is_none());
        }
    }

    mod board {
        use super::*;

        #[test]
        fn reshapes_into_eight_rows_of_six() {
            let cells = (0..48).map(|i| i.to_string()).collect_vec();
            let rows = to_grid_rows(&cells);

            assert_eq!(rows.len(), 8);
            assert!(rows.iter().all(|row| row.len() == 6));
            assert_eq!(rows[0][0], "0");
            assert_eq!(rows[7][5], "47");
        }

        #[test]
        fn pads_short_input_with_blanks() {
            let rows = to_grid_rows(&["A"]);

            assert_eq!(rows[0][0], "A");
            assert_eq!(rows[7][5], BLANK);
        }

        #[test]
        fn displays_blanks_as_dots() {
            let grid = grid_of(&["PACO..", "IMKE.."]);

            assert_eq!(format!("{}", grid), "PACO..
IMKE..
......
......
......
......
......
......
");
        }

        #[test]
        fn neighbors_follow_trace_order() {
            let steps = Step::neighbors_of(Location(1, 1)).into_iter().map(|(step, _)| step).collect_vec();

            assert_eq!(steps, vec![
                Step::Up, Step::Down, Step::UpLeft, Step::Left, Step::DownLeft, Step::UpRight, Step::Right, Step::DownRight,
            ]);
            assert_eq!(Step::neighbors_of(Location(5, 7)).len(), 3);
        }

        #[test]
        fn locations_round_trip_flat_indices() {
            assert_eq!(Location::from_index(47), Some(Location(5, 7)));
            assert_eq!(Location::from_index(48), None);
            assert_eq!(Location(5, 7).index(), 47);
            assert_eq!(Location::checked(-1, 0), None);
            assert_eq!(Location::checked(5, 8), None);
        }
    }
}
