use crate::models::{Benchmark, BenchmarkLevel, Framework, MetricDefinition, MetricIcon};

use BenchmarkLevel::{Elite, High, Low, Medium};

pub(super) struct MetricSeed {
    id: &'static str,
    framework: Framework,
    title: &'static str,
    subtitle: &'static str,
    icon: MetricIcon,
    calculation: &'static str,
    formula: &'static str,
    significance: &'static str,
    history: &'static str,
    benchmarks: [(BenchmarkLevel, &'static str, &'static str); 4],
    benefits: [&'static str; 4],
    origin: &'static str,
}

impl From<&MetricSeed> for MetricDefinition {
    fn from(seed: &MetricSeed) -> Self {
        Self {
            id: seed.id.to_string(),
            framework: seed.framework,
            title: seed.title.to_string(),
            subtitle: seed.subtitle.to_string(),
            icon: seed.icon,
            calculation_description: seed.calculation.to_string(),
            formula: seed.formula.to_string(),
            significance: seed.significance.to_string(),
            history: seed.history.to_string(),
            benchmarks: seed
                .benchmarks
                .iter()
                .map(|(level, label, value)| Benchmark {
                    level: *level,
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            benefits: seed.benefits.iter().map(ToString::to_string).collect(),
            origin: seed.origin.to_string(),
        }
    }
}

pub(super) const CATALOG: &[MetricSeed] = &[
    // DORA
    MetricSeed {
        id: "deployment-frequency",
        framework: Framework::Dora,
        title: "Deployment Frequency",
        subtitle: "How often code is deployed to production",
        icon: MetricIcon::BarChart,
        calculation: "Total successful deployments ÷ Time period (days/weeks)",
        formula: "DF = Deployments / Time Period",
        significance: "Deployment Frequency measures how often your organization deploys code to production. Higher frequency indicates better automation, smaller batch sizes, and faster feedback loops. Elite teams deploy on-demand, multiple times per day.",
        history: "Introduced by Google's DevOps Research and Assessment (DORA) team in 2014. Based on 6+ years of research with over 32,000 professionals worldwide. Published in \"Accelerate\" book by Nicole Forsgren, Jez Humble, and Gene Kim.",
        benchmarks: [
            (Elite, "Elite", "Multiple/day"),
            (High, "High", "1/week - 1/month"),
            (Medium, "Medium", "1/month - 6/month"),
            (Low, "Low", "< 1/6 months"),
        ],
        benefits: [
            "Faster time-to-market for new features",
            "Reduced risk through smaller changes",
            "Quicker feedback from users and stakeholders",
            "Improved team morale and confidence",
        ],
        origin: "DORA Research, 2014",
    },
    MetricSeed {
        id: "lead-time",
        framework: Framework::Dora,
        title: "Lead Time for Changes",
        subtitle: "Time from code commit to production",
        icon: MetricIcon::Clock,
        calculation: "Time when code is committed → Time when code is running in production",
        formula: "LT = Deploy Time - Commit Time",
        significance: "Lead Time measures the efficiency of your delivery pipeline. Shorter lead times mean faster value delivery, quicker bug fixes, and more responsive teams. It reflects the health of your CI/CD pipeline and review processes.",
        history: "Derived from Lean manufacturing principles (Toyota Production System) and adapted by DORA for software delivery. Part of the \"Four Key Metrics\" that predict organizational performance.",
        benchmarks: [
            (Elite, "Elite", "< 1 hour"),
            (High, "High", "1 day - 1 week"),
            (Medium, "Medium", "1 week - 1 month"),
            (Low, "Low", "> 1 month"),
        ],
        benefits: [
            "Faster delivery of value to customers",
            "Quick response to market changes",
            "Identifies bottlenecks in the pipeline",
            "Enables rapid experimentation",
        ],
        origin: "DORA Research, 2014",
    },
    MetricSeed {
        id: "change-failure-rate",
        framework: Framework::Dora,
        title: "Change Failure Rate",
        subtitle: "Percentage of deployments causing failures",
        icon: MetricIcon::AlertTriangle,
        calculation: "(Failed deployments requiring rollback/hotfix ÷ Total deployments) × 100",
        formula: "CFR = (Failed Deploys / Total Deploys) × 100%",
        significance: "Change Failure Rate indicates the quality of your release process. Lower rates mean better testing, code review, and deployment practices. High CFR suggests issues with testing coverage, code quality, or deployment processes.",
        history: "Established by DORA as a quality metric that balances speed metrics. Research shows elite performers achieve both high velocity AND low failure rates, disproving the speed vs. quality trade-off myth.",
        benchmarks: [
            (Elite, "Elite", "0-15%"),
            (High, "High", "16-30%"),
            (Medium, "Medium", "31-45%"),
            (Low, "Low", "> 45%"),
        ],
        benefits: [
            "Higher customer satisfaction and trust",
            "Reduced emergency firefighting",
            "Lower stress on engineering teams",
            "Better code quality and testing practices",
        ],
        origin: "DORA Research, 2014",
    },
    MetricSeed {
        id: "mttr",
        framework: Framework::Dora,
        title: "Mean Time to Restore",
        subtitle: "How quickly you recover from failures",
        icon: MetricIcon::RotateCcw,
        calculation: "Sum of all recovery times ÷ Number of incidents",
        formula: "MTTR = Σ(Recovery Time) / Incident Count",
        significance: "MTTR measures organizational resilience. Fast recovery minimizes customer impact and business disruption. It reflects incident response maturity, monitoring quality, and system observability.",
        history: "Originally from reliability engineering, adopted by DORA to measure recovery capability. Shifts focus from preventing all failures (impossible) to recovering quickly from them (achievable).",
        benchmarks: [
            (Elite, "Elite", "< 1 hour"),
            (High, "High", "< 1 day"),
            (Medium, "Medium", "1 day - 1 week"),
            (Low, "Low", "> 1 week"),
        ],
        benefits: [
            "Minimized customer impact during outages",
            "Reduced revenue loss from downtime",
            "Better on-call experience for engineers",
            "Improved system observability",
        ],
        origin: "DORA Research, 2014",
    },
    // SPACE
    MetricSeed {
        id: "satisfaction",
        framework: Framework::Space,
        title: "Satisfaction & Well-Being",
        subtitle: "How fulfilled developers feel with their work",
        icon: MetricIcon::Smile,
        calculation: "Aggregated survey responses on job satisfaction, work-life balance, and team health",
        formula: "Survey Score (1-10) + Sentiment Analysis + Burnout Indicators",
        significance: "Satisfaction predicts retention, productivity, and innovation. Happy developers write better code, collaborate more effectively, and stay longer. It's the foundation of sustainable high performance.",
        history: "SPACE framework was introduced in 2021 by researchers from GitHub, Microsoft, and University of Victoria. Published in ACM Queue journal as a response to oversimplified productivity metrics.",
        benchmarks: [
            (Elite, "Thriving", "8.5-10"),
            (High, "Engaged", "7-8.4"),
            (Medium, "Neutral", "5-6.9"),
            (Low, "At Risk", "< 5"),
        ],
        benefits: [
            "Higher retention and lower turnover",
            "Increased innovation and creativity",
            "Better team collaboration",
            "Sustainable long-term performance",
        ],
        origin: "SPACE Framework, 2021",
    },
    MetricSeed {
        id: "performance",
        framework: Framework::Space,
        title: "Performance",
        subtitle: "Outcomes and impact of developer work",
        icon: MetricIcon::Pulse,
        calculation: "Quality of code + Reliability of systems + Customer impact + Business outcomes",
        formula: "Code Quality Score + System Reliability + Customer Satisfaction",
        significance: "Performance focuses on outcomes, not just outputs. It measures the actual value delivered to customers and the business, not just lines of code or features shipped. Quality matters as much as quantity.",
        history: "Part of the SPACE framework that challenges activity-based metrics. Emphasizes that true performance is multi-dimensional and cannot be captured by a single number.",
        benchmarks: [
            (Elite, "Exceptional", "90-100%"),
            (High, "Strong", "75-89%"),
            (Medium, "Developing", "50-74%"),
            (Low, "Needs Focus", "< 50%"),
        ],
        benefits: [
            "Focus on customer value over activity",
            "Quality-driven development culture",
            "Better business alignment",
            "Meaningful work for developers",
        ],
        origin: "SPACE Framework, 2021",
    },
    MetricSeed {
        id: "activity",
        framework: Framework::Space,
        title: "Activity",
        subtitle: "Count of actions or outputs",
        icon: MetricIcon::Activity,
        calculation: "Commits + PRs + Code Reviews + Meetings + Documentation",
        formula: "Weighted sum of development activities",
        significance: "Activity metrics provide signals but never tell the complete story. High activity can indicate productivity OR thrashing. Low activity might mean efficiency OR disengagement. Always interpret in context.",
        history: "SPACE includes Activity to acknowledge that output counts exist, but explicitly warns against using them in isolation. The framework promotes balanced interpretation.",
        benchmarks: [
            (Elite, "Balanced", "Context-dependent"),
            (High, "Active", "Above team avg"),
            (Medium, "Normal", "Team average"),
            (Low, "Review", "Below avg"),
        ],
        benefits: [
            "Visibility into work patterns",
            "Identification of workload imbalances",
            "Capacity planning insights",
            "Early warning for burnout (too high) or disengagement (too low)",
        ],
        origin: "SPACE Framework, 2021",
    },
    MetricSeed {
        id: "collaboration",
        framework: Framework::Space,
        title: "Communication & Collaboration",
        subtitle: "How people work together",
        icon: MetricIcon::Users,
        calculation: "PR review participation + Cross-team contributions + Knowledge sharing + Meeting patterns",
        formula: "Review Engagement + Cross-team PRs + Documentation + Communication Score",
        significance: "Software is a team sport. Collaboration quality affects code quality, knowledge distribution, and team resilience. Strong collaboration reduces silos, improves onboarding, and builds team trust.",
        history: "SPACE recognizes that modern software development is inherently collaborative. This dimension captures the social and communicative aspects that traditional metrics miss.",
        benchmarks: [
            (Elite, "Excellent", "9-10"),
            (High, "Good", "7-8.9"),
            (Medium, "Fair", "5-6.9"),
            (Low, "Siloed", "< 5"),
        ],
        benefits: [
            "Better code quality through reviews",
            "Faster onboarding of new members",
            "Knowledge sharing across team",
            "Reduced bus factor risk",
        ],
        origin: "SPACE Framework, 2021",
    },
    MetricSeed {
        id: "efficiency",
        framework: Framework::Space,
        title: "Efficiency & Flow",
        subtitle: "Ability to work without interruptions",
        icon: MetricIcon::Stopwatch,
        calculation: "Focus time + Context switches + Wait time + Flow state duration",
        formula: "Deep Work Hours / Total Hours × (1 - Interruption Rate)",
        significance: "Flow state is where the best work happens. Efficiency measures how much uninterrupted time developers have for deep work. Frequent interruptions and context switches dramatically reduce productivity.",
        history: "Based on Mihaly Csikszentmihalyi's Flow research and Cal Newport's Deep Work. SPACE includes this to highlight that productivity isn't just about what you do, but the conditions under which you do it.",
        benchmarks: [
            (Elite, "Optimal", "> 4 hrs/day focus"),
            (High, "Good", "3-4 hrs/day"),
            (Medium, "Fragmented", "2-3 hrs/day"),
            (Low, "Disrupted", "< 2 hrs/day"),
        ],
        benefits: [
            "Higher quality deep work output",
            "Reduced cognitive fatigue",
            "Better developer experience",
            "Faster complex problem solving",
        ],
        origin: "SPACE Framework, 2021",
    },
    // Supporting metrics
    MetricSeed {
        id: "code-churn",
        framework: Framework::Dora,
        title: "Code Churn",
        subtitle: "Code rewritten within short time period",
        icon: MetricIcon::Globe,
        calculation: "(Lines deleted or modified within 21 days of being written ÷ Total lines changed) × 100",
        formula: "Churn % = (Recently Modified Lines / Total Lines) × 100",
        significance: "High code churn can indicate unclear requirements, poor initial design, or excessive rework. Some churn is healthy (refactoring), but consistently high churn suggests process issues.",
        history: "Derived from software engineering research on rework patterns. Related to DORA's Change Failure Rate as high churn often correlates with deployment issues.",
        benchmarks: [
            (Elite, "Healthy", "< 15%"),
            (High, "Normal", "15-25%"),
            (Medium, "Elevated", "25-40%"),
            (Low, "High Risk", "> 40%"),
        ],
        benefits: [
            "Identify unclear requirements early",
            "Spot technical debt accumulation",
            "Improve estimation accuracy",
            "Reduce hidden rework costs",
        ],
        origin: "Software Engineering Research",
    },
    MetricSeed {
        id: "flow-efficiency",
        framework: Framework::Space,
        title: "Flow Efficiency",
        subtitle: "Active time vs wait time ratio",
        icon: MetricIcon::Zap,
        calculation: "(Active work time ÷ Total lead time) × 100",
        formula: "Flow Efficiency = (Work Time / (Work Time + Wait Time)) × 100%",
        significance: "Most software delivery time is spent waiting, not working. Flow efficiency reveals how much of your lead time is productive. Industry average is only 15-20%. Elite teams achieve 40%+.",
        history: "Borrowed from Lean manufacturing (Toyota). Applied to software through Kanban methodology. Reveals hidden waste in processes.",
        benchmarks: [
            (Elite, "Excellent", "> 40%"),
            (High, "Good", "25-40%"),
            (Medium, "Average", "15-25%"),
            (Low, "Poor", "< 15%"),
        ],
        benefits: [
            "Identify process bottlenecks",
            "Reduce wait times in pipeline",
            "Improve delivery predictability",
            "Focus improvement efforts",
        ],
        origin: "Lean/Kanban Methodology",
    },
    MetricSeed {
        id: "throughput",
        framework: Framework::Space,
        title: "Throughput",
        subtitle: "Work items completed per time period",
        icon: MetricIcon::BarChart,
        calculation: "Count of completed work items (stories, tasks, bugs) per week/sprint",
        formula: "Throughput = Completed Items / Time Period",
        significance: "Throughput is a team-level metric showing delivery capacity. Unlike velocity, it doesn't require story points. Stable throughput indicates predictable delivery. Variability suggests process issues.",
        history: "Key metric in Kanban methodology. Promoted as an alternative to velocity in agile. Part of probabilistic forecasting approaches.",
        benchmarks: [
            (Elite, "Stable", "Low variance"),
            (High, "Predictable", "±15% variance"),
            (Medium, "Variable", "±30% variance"),
            (Low, "Unpredictable", "> 30% variance"),
        ],
        benefits: [
            "Predictable delivery planning",
            "Better capacity management",
            "Identify team-level blockers",
            "Improve forecasting accuracy",
        ],
        origin: "Kanban/Lean",
    },
    MetricSeed {
        id: "pr-review-time",
        framework: Framework::Space,
        title: "PR Review Time",
        subtitle: "Time to first review on pull requests",
        icon: MetricIcon::Clock,
        calculation: "Time from PR opened to first substantive review comment",
        formula: "Review Time = First Review Timestamp - PR Open Timestamp",
        significance: "Long PR review times kill developer flow and increase lead time. Quick reviews enable faster iteration. This metric reflects team collaboration health and code review culture.",
        history: "Emerged from DevEx research showing code review is often the biggest bottleneck in lead time. Part of SPACE's Communication & Collaboration dimension.",
        benchmarks: [
            (Elite, "Excellent", "< 2 hours"),
            (High, "Good", "2-4 hours"),
            (Medium, "Slow", "4-24 hours"),
            (Low, "Blocker", "> 24 hours"),
        ],
        benefits: [
            "Faster developer feedback loops",
            "Reduced context switching",
            "Better collaboration culture",
            "Improved lead time",
        ],
        origin: "DevEx Research",
    },
    MetricSeed {
        id: "burnout-risk",
        framework: Framework::Space,
        title: "Burnout Risk",
        subtitle: "Indicators of unsustainable work patterns",
        icon: MetricIcon::Loader,
        calculation: "Combines: overtime hours, weekend work, declining satisfaction, reduced output",
        formula: "Risk Score = f(Hours, Patterns, Satisfaction, Velocity Change)",
        significance: "Burnout destroys productivity, creativity, and retention. Early detection allows intervention before it's too late. Sustainable pace is essential for long-term team health.",
        history: "Based on organizational psychology research on occupational burnout. Christina Maslach's burnout inventory and modern workplace wellbeing studies.",
        benchmarks: [
            (Elite, "Low Risk", "< 15%"),
            (High, "Monitor", "15-30%"),
            (Medium, "Elevated", "30-50%"),
            (Low, "Critical", "> 50%"),
        ],
        benefits: [
            "Early intervention for at-risk developers",
            "Improved retention rates",
            "Sustainable long-term performance",
            "Healthier team culture",
        ],
        origin: "Organizational Psychology",
    },
];
