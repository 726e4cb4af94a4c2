#[cfg(test)]
mod tests {
    use super::super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_file() {
        let input = indoc! {"
            /*
             * nivel.cpp
             * Base class for every level.
             */
            #include \"nivel.h\"   

            // Constructor
            Nivel::Nivel(int id) : id(id) { /* nothing */ }


            int Nivel::getId() const {
                return id; // accessor
            }
        "};
        let expected = indoc! {"
            #include \"nivel.h\"

            Nivel::Nivel(int id) : id(id) {  }

            int Nivel::getId() const {
                return id;
            }
        "};
        assert_eq!(strip(input), expected);
    }

    #[test]
    fn test_header_file() {
        let input = indoc! {"
            #ifndef COHETE_H
            #define COHETE_H

            class Cohete {
            public:
                double masa;      // kg
                double empuje;    /* N */ double angulo;
                /* velocity
                   in m/s */ double velocidad;
            };

            #endif // COHETE_H
        "};
        let expected = indoc! {"
            #ifndef COHETE_H
            #define COHETE_H

            class Cohete {
            public:
                double masa;
                double empuje;     double angulo;

            double velocidad;
            };

            #endif
        "};
        assert_eq!(strip(input), expected);
    }

    #[test]
    fn test_comment_free_text_only_loses_whitespace() {
        let input = "int a;  \n\n\n\nint b;\t\nreturn a * b;";
        assert_eq!(strip(input), "int a;\n\nint b;\nreturn a * b;");
    }

    #[test]
    fn test_idempotent_on_typical_sources() {
        let samples = [
            "int x = 1; // note",
            "a /* b */ c",
            "x; /*\ncomment line\n*/ y;",
            "a /* never closes\nb\nc",
            "\n\na\n\n\nb\n",
            indoc! {"
                // header
                void f() {
                    /* body
                     * more
                     */
                    g(); // call
                }
            "},
        ];
        for sample in samples {
            let once = strip(sample);
            assert_eq!(strip(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_block_comment_inside_line_comment() {
        // The opener is found first, so the rest of the file is swallowed.
        let input = "int a; // see /* below\nint b;\n*/ int c;";
        assert_eq!(strip(input), "int a;\nint c;");
    }
}
