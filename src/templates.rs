//! Built-in sample jobs.
//!
//! The default editor text plus a handful of quick-start templates. Lookups
//! accept either the display name or its slug, case-insensitively.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub slug: &'static str,
    pub code: &'static str,
}

pub const DEFAULT_JCL: &str = "//MYJOB    JOB (ACCT,123),'MY JOB NAME',
//             CLASS=A,
//             MSGCLASS=X,
//             MSGLEVEL=(1,1),
//             NOTIFY=&SYSUID
//*
//*  YOUR JCL CODE HERE
//*
//STEP01   EXEC PGM=IEFBR14
//NEWFILE  DD DSN=MY.NEW.FILE,
//            DISP=(NEW,CATLG,DELETE),
//            SPACE=(CYL,(10,5),RLSE),
//            DCB=(RECFM=FB,LRECL=80,BLKSIZE=0)
//";

/// The starter job shown before any template is picked.
pub const DEFAULT_TEMPLATE: Template = Template {
    name: "Starter Job",
    slug: "default",
    code: DEFAULT_JCL,
};

pub const TEMPLATES: &[Template] = &[
    Template {
        name: "Basic Job",
        slug: "basic",
        code: "//BASICJOB JOB (ACCT),'BASIC JOB',CLASS=A,MSGCLASS=X
//*
//STEP01   EXEC PGM=IEFBR14
//SYSPRINT DD SYSOUT=*
//",
    },
    Template {
        name: "Copy File (IEBGENER)",
        slug: "iebgener",
        code: "//COPYJOB  JOB (ACCT),'COPY FILE',CLASS=A,MSGCLASS=X
//*
//COPY     EXEC PGM=IEBGENER
//SYSPRINT DD SYSOUT=*
//SYSIN    DD DUMMY
//SYSUT1   DD DSN=INPUT.FILE,DISP=SHR
//SYSUT2   DD DSN=OUTPUT.FILE,
//            DISP=(NEW,CATLG,DELETE),
//            SPACE=(CYL,(50,25),RLSE),
//            DCB=(RECFM=FB,LRECL=100)
//",
    },
    Template {
        name: "Sort Job",
        slug: "sort",
        code: "//SORTJOB  JOB (ACCT),'SORT DATA',CLASS=A,MSGCLASS=X
//*
//SORT     EXEC PGM=SORT
//SYSOUT   DD SYSOUT=*
//SORTIN   DD DSN=INPUT.FILE,DISP=SHR
//SORTOUT  DD DSN=OUTPUT.SORTED,
//            DISP=(NEW,CATLG,DELETE),
//            SPACE=(CYL,(100,50),RLSE)
//SYSIN    DD *
  SORT FIELDS=(1,10,CH,A)
/*
//",
    },
    Template {
        name: "IDCAMS VSAM",
        slug: "idcams",
        code: "//VSAMJOB  JOB (ACCT),'VSAM OPERATIONS',CLASS=A,MSGCLASS=X
//*
//DEFVSAM  EXEC PGM=IDCAMS
//SYSPRINT DD SYSOUT=*
//SYSIN    DD *
  DEFINE CLUSTER -
         (NAME(MY.VSAM.FILE) -
          INDEXED -
          RECORDSIZE(100 100) -
          KEYS(10 0) -
          FREESPACE(20 10)) -
         DATA -
          (CYLINDERS(10 5)) -
         INDEX -
          (CYLINDERS(2 1))
/*
//",
    },
    Template {
        name: "Multi-Step Job",
        slug: "multi-step",
        code: "//MULTIJOB JOB (ACCT),'MULTI-STEP',CLASS=A,MSGCLASS=X
//*
//STEP01   EXEC PGM=EXTRACT
//INPUT    DD DSN=SOURCE.FILE,DISP=SHR
//OUTPUT   DD DSN=&&TEMP,DISP=(NEW,PASS)
//SYSPRINT DD SYSOUT=*
//*
//         IF (STEP01.RC = 0) THEN
//STEP02   EXEC PGM=PROCESS
//INPUT    DD DSN=*.STEP01.OUTPUT,DISP=(OLD,DELETE)
//OUTPUT   DD DSN=FINAL.FILE,DISP=(NEW,CATLG)
//SYSPRINT DD SYSOUT=*
//         ENDIF
//*
//CLEANUP  EXEC PGM=CLEANUP,COND=EVEN
//SYSPRINT DD SYSOUT=*
//",
    },
];

/// Find a template by display name or slug. `default` selects the editor text.
pub fn find(name: &str) -> Result<Template> {
    let want = name.trim();
    if want.eq_ignore_ascii_case(DEFAULT_TEMPLATE.slug)
        || want.eq_ignore_ascii_case(DEFAULT_TEMPLATE.name)
    {
        return Ok(DEFAULT_TEMPLATE);
    }
    TEMPLATES
        .iter()
        .find(|t| t.slug.eq_ignore_ascii_case(want) || t.name.eq_ignore_ascii_case(want))
        .copied()
        .ok_or_else(|| Error::UnknownTemplate(want.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::validate;
    use crate::models::RuleId;
    use crate::report::Verdict;

    #[test]
    fn test_find_by_slug_and_name() {
        assert_eq!(find("SORT").unwrap().name, "Sort Job");
        assert_eq!(find("copy file (iebgener)").unwrap().slug, "iebgener");
        let d = find("default").unwrap();
        assert_eq!(d.code, DEFAULT_JCL);
        assert_eq!(d.name, DEFAULT_TEMPLATE.name);
        assert_eq!(find("starter job").unwrap().slug, "default");
        assert!(matches!(find("nope"), Err(Error::UnknownTemplate(_))));
    }

    #[test]
    fn test_single_line_dd_templates_are_clean() {
        for slug in ["basic", "idcams", "multi-step"] {
            let r = validate(find(slug).unwrap().code);
            assert_eq!(r.verdict(), Verdict::Valid, "{slug}");
        }
    }

    #[test]
    fn test_continued_dd_lines_draw_disposition_warning() {
        // DISP= sits on the continuation line, which the checker does not join
        let r = validate(find("sort").unwrap().code);
        assert_eq!(r.verdict(), Verdict::WarningsOnly);
        let lines: Vec<_> = r
            .findings()
            .iter()
            .map(|f| (f.line, f.rule))
            .collect();
        assert_eq!(lines, vec![(6, RuleId::DdDisposition)]);

        let r = validate(DEFAULT_JCL);
        assert_eq!(r.findings().len(), 1);
        assert_eq!(r.findings()[0].line, 10);
    }
}
