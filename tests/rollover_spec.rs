use speculate2::speculate;
use standup_core::models::{NoteConfig, NoteState, SectionContent};
use standup_core::{has_conflict, infer_roles, parse, rollover, NoteError, RoleAssignment};

speculate! {
    describe "infer_roles" {
        it "finds yesterday and today in classic labels" {
            let roles = infer_roles(&["Yesterday", "Today", "Blockers"], &[true, true, true]);
            assert_eq!(roles.older_slot, Some(0));
            assert_eq!(roles.newer_slot, Some(1));
        }

        it "is undetermined for neutral labels" {
            let roles = infer_roles(&["Notes A", "Notes B", "Notes C"], &[true, true, true]);
            assert_eq!(roles.older_slot, None);
            assert_eq!(roles.newer_slot, None);
        }

        it "reads question-style labels" {
            let roles = infer_roles(
                &["What have you finished?", "What will you do next?", "Anything in your way?"],
                &[true, true, true],
            );
            assert_eq!(roles.pair(), Some((0, 1)));
        }

        it "only counts visible slots" {
            let labels = ["Last week", "This week", "Previously"];
            assert_eq!(infer_roles(&labels, &[true, true, true]).older_slot, None);
            assert_eq!(infer_roles(&labels, &[true, true, false]).older_slot, Some(0));
        }
    }

    describe "rollover" {
        before {
            let state = NoteState {
                sections: vec![
                    SectionContent::from_bullets(["fixed bug"]),
                    SectionContent::default(),
                    SectionContent::from_text("waiting on design"),
                ],
            };
        }

        it "moves the newer bullets into the older slot" {
            let next = rollover(1, 0, &state, true).expect("rollover failed");
            assert_eq!(next.sections[1].bullets, vec!["fixed bug"]);
            assert!(next.sections[0].bullets.is_empty());
        }

        it "leaves other slots alone" {
            let next = rollover(1, 0, &state, true).expect("rollover failed");
            assert_eq!(next.sections[2], state.sections[2]);
        }

        it "rejects slots that do not exist" {
            assert!(matches!(
                rollover(0, 3, &state, true),
                Err(NoteError::InvalidSlot { slot: 3, .. })
            ));
        }

        it "refuses to run without inferred roles" {
            let roles = RoleAssignment::default();
            assert_eq!(roles.rollover(&state, true), Err(NoteError::RolesUndetermined));
        }
    }

    describe "has_conflict" {
        it "is true only when the older slot has live content" {
            let state = NoteState {
                sections: vec![
                    SectionContent::from_bullets(["fixed bug"]),
                    SectionContent::default(),
                ],
            };
            assert!(has_conflict(0, &state, true));
            assert!(!has_conflict(0, &state, false));
            assert!(!has_conflict(1, &state, false));
            assert!(!has_conflict(1, &state, true));
        }

        it "counts whitespace-only content as non-empty" {
            let state = NoteState {
                sections: vec![
                    SectionContent::from_bullets([""]),
                    SectionContent::from_text("   "),
                ],
            };
            assert!(has_conflict(0, &state, true));
            assert!(has_conflict(1, &state, false));
        }
    }

    describe "daily cycle" {
        it "parses, rolls over and leaves today empty" {
            let config = NoteConfig::default().bullet_mode(true);
            let text = "What are you working on today?\n- ship search\n\nWhat did you work on yesterday?\n\nWhat are your blockers?\n- none";
            let update = parse(text, &config.labels());

            let mut state = NoteState::empty(config.slot_count());
            state.apply(&update, config.bullet_mode);

            let roles = RoleAssignment::from_config(&config);
            assert_eq!(roles.pair(), Some((1, 0)));
            assert!(!roles.has_conflict(&state, config.bullet_mode));

            let next = roles.rollover(&state, config.bullet_mode).expect("rollover failed");
            assert_eq!(next.sections[1].bullets, vec!["ship search"]);
            assert!(next.sections[0].bullets.is_empty());
            assert_eq!(next.sections[2].bullets, vec!["none"]);
            assert!(roles.has_conflict(&next, config.bullet_mode));
        }
    }
}
