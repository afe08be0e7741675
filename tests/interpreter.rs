mod common;

#[cfg(test)]
mod interpreter_tests {
    use super::common::{run, Harness};
    use jslox::session::Outcome;
    use pretty_assertions::assert_eq;

    /// Run a program that must complete and return what it printed.
    fn output_of(source: &str) -> String {
        let result = run(source);
        assert_eq!(result.reports, Vec::<String>::new());
        assert_eq!(result.outcome, Outcome::Completed);
        result.output
    }

    /// Run a program that must stop on a run-time error and return the report.
    fn runtime_error_of(source: &str) -> String {
        let result = run(source);
        assert_eq!(result.outcome, Outcome::RuntimeError);
        assert_eq!(result.reports.len(), 1);
        result.reports[0].clone()
    }

    #[test]
    fn test_interpreter_01_fibonacci() {
        let source = "
            function fib(n) {
                if (n <= 1) return n;
                return fib(n - 2) + fib(n - 1);
            }
            console.log(fib(0));
            console.log(fib(1));
            console.log(fib(10));
        ";

        assert_eq!(output_of(source), "0\n1\n55\n");
    }

    #[test]
    fn test_interpreter_02_closures_capture_by_reference() {
        let source = "
            let a = 1;
            function show() { console.log(a); }
            a = 2;
            show();
        ";

        assert_eq!(output_of(source), "2\n");
    }

    #[test]
    fn test_interpreter_03_counter_closure() {
        let source = "
            function makeCounter() {
                let count = 0;
                function increment() {
                    count = count + 1;
                    return count;
                }
                return increment;
            }
            let counter = makeCounter();
            counter();
            counter();
            console.log(counter());
        ";

        assert_eq!(output_of(source), "3\n");
    }

    #[test]
    fn test_interpreter_04_block_shadowing_does_not_leak() {
        let source = "
            let a = 1;
            { let a = 2; console.log(a); }
            console.log(a);
        ";

        assert_eq!(output_of(source), "2\n1\n");
    }

    #[test]
    fn test_interpreter_05_innermost_binding_wins() {
        // Walking scopes outermost-first would bind the read to the outer `a`
        // at the wrong distance.
        let source = "
            {
                let a = \"outer\";
                {
                    let a = \"inner\";
                    {
                        console.log(a);
                    }
                }
            }
        ";

        assert_eq!(output_of(source), "inner\n");
    }

    #[test]
    fn test_interpreter_06_closure_binding_is_static() {
        let source = "
            let a = \"global\";
            {
                function show() { console.log(a); }
                show();
                let a = \"block\";
                show();
            }
        ";

        assert_eq!(output_of(source), "global\nglobal\n");
    }

    #[test]
    fn test_interpreter_07_super_binds_lexically() {
        let source = "
            class A { method() { console.log(\"A\"); } }
            class B extends A {
                method() { console.log(\"B\"); }
                test() { super.method(); }
            }
            class C extends B {}
            C().test();
        ";

        assert_eq!(output_of(source), "A\n");
    }

    #[test]
    fn test_interpreter_08_classes_fields_and_constructors() {
        let source = "
            class Point {
                constructor(x, y) { this.x = x; this.y = y; }
                sum() { return this.x + this.y; }
            }
            let p = new Point(2, 3);
            console.log(p.sum());
            p.x = 10;
            console.log(p.sum());
            console.log(p);
            console.log(Point);
        ";

        assert_eq!(output_of(source), "5\n13\nPoint instance\nPoint\n");
    }

    #[test]
    fn test_interpreter_09_inherited_constructor_and_bound_methods() {
        let source = "
            class Animal {
                constructor(name) { this.name = name; }
                speak() { return this.name + \" makes a sound\"; }
            }
            class Dog extends Animal {
                speak() { return super.speak() + \" (woof)\"; }
            }
            let d = Dog(\"Rex\");
            let speak = d.speak;
            console.log(speak());
        ";

        assert_eq!(output_of(source), "Rex makes a sound (woof)\n");
    }

    #[test]
    fn test_interpreter_10_fields_shadow_methods() {
        let source = "
            class A { m() { return \"method\"; } }
            let a = A();
            a.m = \"field\";
            console.log(a.m);
        ";

        assert_eq!(output_of(source), "field\n");
    }

    #[test]
    fn test_interpreter_11_arity_mismatch() {
        assert_eq!(
            runtime_error_of("function f() {}\nf(1);"),
            "[line 2] Error at ')': Expected 0 arguments but got 1."
        );
        assert_eq!(
            runtime_error_of("class P { constructor(a) {} }\nP();"),
            "[line 2] Error at ')': Expected 1 arguments but got 0."
        );
    }

    #[test]
    fn test_interpreter_12_truthiness() {
        let source = "
            if (0) console.log(\"zero\"); else console.log(\"no zero\");
            if (-1) console.log(\"negative\"); else console.log(\"no negative\");
            if (\"0\") console.log(\"string zero\");
            if (\"\") console.log(\"empty\"); else console.log(\"no empty\");
            if (null) console.log(\"null\"); else console.log(\"no null\");
            if (console) console.log(\"module\");
        ";

        assert_eq!(
            output_of(source),
            "no zero\nno negative\nstring zero\nno empty\nno null\nmodule\n"
        );
    }

    #[test]
    fn test_interpreter_13_comparison_quirk() {
        assert_eq!(output_of("console.log(\"a\" < 1);"), "false\n");
        assert_eq!(output_of("console.log(\"a\" >= 1);"), "false\n");
        assert_eq!(output_of("console.log(\"a\" <= 1);"), "false\n");
        assert_eq!(output_of("console.log(2 >= 1);"), "true\n");
        assert_eq!(
            runtime_error_of("console.log(\"a\" > 1);"),
            "[line 1] Error at '>': Operands must be numbers."
        );
    }

    #[test]
    fn test_interpreter_14_arithmetic() {
        assert_eq!(output_of("console.log(0.3 - 0.1);"), "0.2\n");
        assert_eq!(output_of("console.log(7 / 2);"), "3.5\n");
        assert_eq!(output_of("console.log(1 / 0);"), "Infinity\n");
        assert_eq!(output_of("console.log(-(2 * 3));"), "-6\n");
        assert_eq!(
            runtime_error_of("-\"x\";"),
            "[line 1] Error at '-': Operand must be a number."
        );
        assert_eq!(
            runtime_error_of("\"x\" * 2;"),
            "[line 1] Error at '*': Operands must be numbers."
        );
    }

    #[test]
    fn test_interpreter_15_string_concatenation() {
        assert_eq!(output_of("console.log(\"a\" + \"b\");"), "ab\n");
        assert_eq!(output_of("console.log(\"n = \" + 3);"), "n = 3\n");
        assert_eq!(output_of("console.log(2.5 + \"!\");"), "2.5!\n");
        assert_eq!(
            runtime_error_of("true + 1;"),
            "[line 1] Error at '+': Operands must be two numbers or two strings."
        );
    }

    #[test]
    fn test_interpreter_16_logical_operators_return_operands() {
        let source = "
            console.log(null || \"fallback\");
            console.log(\"first\" || \"second\");
            console.log(0 && \"never\");
            console.log(1 && \"second\");
        ";

        assert_eq!(output_of(source), "fallback\nfirst\n0\nsecond\n");
    }

    #[test]
    fn test_interpreter_17_equality() {
        let source = "
            console.log(null == null);
            console.log(null == false);
            console.log(1 == 1);
            console.log(\"a\" != \"a\");
            function f() {}
            let g = f;
            console.log(f == g);
            console.log(console == console);
        ";

        assert_eq!(output_of(source), "true\nfalse\ntrue\nfalse\ntrue\ntrue\n");
    }

    #[test]
    fn test_interpreter_18_loops() {
        let source = "
            let total = 0;
            for (let i = 1; i <= 4; i = i + 1) total = total + i;
            let n = 3;
            while (n > 0) n = n - 1;
            console.log(total);
            console.log(n);
        ";

        assert_eq!(output_of(source), "10\n0\n");
    }

    #[test]
    fn test_interpreter_19_return_unwinds_loops() {
        let source = "
            function firstOver(limit) {
                let i = 0;
                while (true) {
                    i = i + 1;
                    if (i > limit) return i;
                }
            }
            console.log(firstOver(3));
            function nothing() { return; }
            console.log(nothing());
        ";

        assert_eq!(output_of(source), "4\nnull\n");
    }

    #[test]
    fn test_interpreter_20_runtime_error_stops_the_run_but_not_the_session() {
        let mut harness = Harness::new();

        let first = harness.run("let kept = \"yes\";\nconsole.log(\"before\");\nmissing;\nconsole.log(\"after\");");
        assert_eq!(first.outcome, Outcome::RuntimeError);
        assert_eq!(first.output, "before\n");
        assert_eq!(first.reports, vec!["[line 3] Error at 'missing': Undefined variable 'missing'."]);

        assert!(harness.session.diagnostics().had_runtime_error());
        assert!(!harness.session.diagnostics().had_compile_error());

        let second = harness.run("console.log(kept);");
        assert_eq!(second.outcome, Outcome::Completed);
        assert_eq!(second.output, "yes\n");
    }

    #[test]
    fn test_interpreter_21_error_inside_block_restores_globals() {
        let mut harness = Harness::new();

        let first = harness.run("let x = \"global\";\n{ let x = \"local\"; nope(); }");
        assert_eq!(first.outcome, Outcome::RuntimeError);

        assert_eq!(harness.run("console.log(x);").output, "global\n");
    }

    #[test]
    fn test_interpreter_22_definitions_persist_across_runs() {
        let mut harness = Harness::new();

        harness.run("function twice(x) { return x * 2; }");
        harness.run("class Box { constructor(v) { this.v = v; } }");

        assert_eq!(harness.run("console.log(twice(Box(21).v));").output, "42\n");
    }

    #[test]
    fn test_interpreter_23_deterministic() {
        let source = "
            class Acc { constructor() { this.total = 0; } add(n) { this.total = this.total + n; return this; } }
            let a = Acc();
            for (let i = 0; i < 5; i = i + 1) a.add(i);
            console.log(a.total);
        ";

        let first = run(source);
        let second = run(source);

        assert_eq!(first.output, "10\n");
        assert_eq!(first.output, second.output);
        assert_eq!(first.reports, second.reports);
    }

    #[test]
    fn test_interpreter_24_property_errors() {
        assert_eq!(
            runtime_error_of("let n = 1;\nn.x;"),
            "[line 2] Error at 'x': Only instances have properties."
        );
        assert_eq!(
            runtime_error_of("let n = 1;\nn.x = 2;"),
            "[line 2] Error at 'x': Only instances have fields."
        );
        assert_eq!(
            runtime_error_of("class A {}\nA().missing;"),
            "[line 2] Error at 'missing': Undefined property 'missing'."
        );
        assert_eq!(
            runtime_error_of("console.warn(1);"),
            "[line 1] Error at 'warn': Undefined property 'warn'."
        );
    }

    #[test]
    fn test_interpreter_25_calling_non_callables() {
        assert_eq!(
            runtime_error_of("\"text\"();"),
            "[line 1] Error at ')': Can only call functions and classes."
        );
        assert_eq!(
            runtime_error_of("let NotAClass = 1;\nclass B extends NotAClass {}"),
            "[line 2] Error at 'NotAClass': Superclass must be a class."
        );
    }

    #[test]
    fn test_interpreter_26_undefined_variable_assignment() {
        assert_eq!(
            runtime_error_of("ghost = 1;"),
            "[line 1] Error at 'ghost': Undefined variable 'ghost'."
        );
    }

    #[test]
    fn test_interpreter_27_stringification() {
        let source = "
            function f() {}
            console.log(f);
            console.log(console.log);
            console.log(console);
            console.log(undefined);
            console.log(true);
            console.log(12.75);
        ";

        assert_eq!(
            output_of(source),
            "<fn f>\n<native fn>\n<native module console>\nnull\ntrue\n12.75\n"
        );
    }

    #[test]
    fn test_interpreter_28_date_now() {
        let source = "
            let t = Date.now();
            console.log(t > 1000000000);
            console.log(t - t);
        ";

        assert_eq!(output_of(source), "true\n0\n");
    }

    #[test]
    fn test_interpreter_29_super_method_must_exist() {
        assert_eq!(
            runtime_error_of("class A {}\nclass B extends A { m() { super.nope(); } }\nB().m();"),
            "[line 2] Error at 'nope': Undefined property 'nope'."
        );
    }
}
