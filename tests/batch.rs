use std::{
    io::Write,
    process::{Command, Stdio},
};

use heron_sat::{
    builder::batch::InstanceReader, config::Config, context::Context, reports::Report,
};

const BATCH: &str = "5
1 0
1 1 1 0
1 2
1 0 -1 0
2 4
1 2 0 -1 2 0
1 -2 0 -1 -2 0
3 3 1 0 -1 2 0 -2 3 0
";

mod batch {
    use super::*;

    #[test]
    fn instance_reports() {
        let mut reports = vec![];
        for instance in InstanceReader::new(BATCH.as_bytes()).unwrap() {
            let mut ctx = Context::from_config(Config::default());
            assert!(ctx.add_instance(instance.unwrap()).is_ok());
            reports.push(ctx.solve().unwrap());
        }

        assert_eq!(
            reports,
            vec![
                Report::Satisfiable,
                Report::Satisfiable,
                Report::Unsatisfiable,
                Report::Unsatisfiable,
                Report::Satisfiable,
            ]
        );
    }

    #[test]
    fn truncated_batch() {
        let input = "2 2 1 1 2 0";
        let mut instances = InstanceReader::new(input.as_bytes()).unwrap();

        assert!(matches!(instances.next(), Some(Ok(_))));
        assert!(matches!(instances.next(), Some(Err(_))));
        assert!(instances.next().is_none());
    }
}

mod dimacs {
    use super::*;

    #[test]
    fn pigeonhole_three_two() {
        let dimacs = "c three pigeons, two holes
p cnf 6 9
1 2 0
3 4 0
5 6 0
-1 -3 0 -1 -5 0 -3 -5 0
-2 -4 0
-2 -6 0
-4
-6 0
";
        let mut ctx = Context::from_config(Config::default());
        let info = ctx.read_dimacs(dimacs.as_bytes()).unwrap();

        assert_eq!(info.expected_atoms, Some(6));
        assert_eq!(info.added_clauses, 9);
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }
}

mod cli {
    use super::*;

    fn run(args: &[&str], input: &str) -> (Option<i32>, String) {
        let mut child = Command::new(env!("CARGO_BIN_EXE_heron_cli"))
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .unwrap();

        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();

        let output = child.wait_with_output().unwrap();
        (output.status.code(), String::from_utf8(output.stdout).unwrap())
    }

    #[test]
    fn batch_lines() {
        let (code, stdout) = run(&[], BATCH);

        assert_eq!(code, Some(0));
        assert_eq!(stdout, "TAK\nTAK\nNIE\nNIE\nTAK\n");
    }

    #[test]
    fn dimacs_exit_codes() {
        let (code, stdout) = run(&["--dimacs", "--model"], "p cnf 2 2\n1 0\n-1 2 0\n");
        assert_eq!(code, Some(10));
        assert_eq!(stdout, "s SATISFIABLE\nv 1 2 0\n");

        let (code, stdout) = run(&["--dimacs"], "p cnf 1 2\n1 0\n-1 0\n");
        assert_eq!(code, Some(20));
        assert_eq!(stdout, "s UNSATISFIABLE\n");
    }

    #[test]
    fn malformed_input() {
        let (code, _) = run(&[], "1\n2 1 1 x 0\n");
        assert_eq!(code, Some(1));
    }
}
